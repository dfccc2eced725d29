//! memo: command-line manager for a personal note collection.
//!
//! Usage:
//!   memo --add --title "Groceries" --content "eggs, flour, coffee"
//!   memo --list --date week
//!   memo --search coffee
//!   memo --delete 3

use clap::{CommandFactory, Parser};
use memo_core::commands::NoteCommands;
use memo_core::store::NoteStore;
use memo_core::{MemoError, MemoResult};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "memo")]
#[command(author, version, about = "Personal notes in a flat JSON file")]
struct Cli {
    /// Add a new note (requires --title and --content)
    #[arg(long)]
    add: bool,

    /// Title for the new note
    #[arg(long)]
    title: Option<String>,

    /// Content for the new note
    #[arg(long)]
    content: Option<String>,

    /// List all notes
    #[arg(long)]
    list: bool,

    /// Find notes containing the given text
    #[arg(long)]
    search: Option<String>,

    /// Delete a note by id
    #[arg(long)]
    delete: Option<u64>,

    /// Narrow --list or --search to a date window
    /// (today, week, month, YYYY-MM-DD, YYYY-MM, YYYY)
    #[arg(long)]
    date: Option<String>,

    /// Backing file for the note collection
    #[arg(long, default_value = "notes.json")]
    file: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Validation failures are user messages, not program errors.
        Err(MemoError::Command(e)) => {
            println!("{e}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Something went wrong: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> MemoResult<()> {
    let store = NoteStore::open(&cli.file)?;
    let commands = NoteCommands::new(&store);

    if cli.add {
        commands.add_note(
            cli.title.as_deref().unwrap_or(""),
            cli.content.as_deref().unwrap_or(""),
        )
    } else if cli.list {
        commands.list_notes(cli.date.as_deref())
    } else if let Some(query) = &cli.search {
        commands.search_notes(query, cli.date.as_deref())
    } else if let Some(id) = cli.delete {
        commands.delete_note(id)
    } else {
        println!("Nothing to do. Available commands:");
        Cli::command().print_help()?;
        Ok(())
    }
}
