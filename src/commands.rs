use crate::error::MemoResult;
use crate::note::Note;
use crate::search;
use crate::store::NoteStore;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("a title and content are both required")]
    MissingFields,

    #[error("search query must not be empty")]
    EmptyQuery,
}

/// High-level note operations over a single [`NoteStore`].
///
/// Wraps a reference to the store and pairs each operation with the
/// console output the CLI shows the user. Input validation lives here,
/// not in the entity or the store.
pub struct NoteCommands<'a> {
    store: &'a NoteStore,
}

impl<'a> NoteCommands<'a> {
    pub fn new(store: &'a NoteStore) -> Self {
        NoteCommands { store }
    }

    /// Adds a new note and reports its assigned id.
    ///
    /// Returns [`CommandError::MissingFields`] when the title or content
    /// is empty.
    pub fn add_note(&self, title: &str, content: &str) -> MemoResult<()> {
        if title.is_empty() || content.is_empty() {
            return Err(CommandError::MissingFields.into());
        }

        let saved = self.store.save(Note::new(title, content))?;
        println!("Added note {}", saved.id.unwrap_or_default());

        Ok(())
    }

    /// Prints every note, optionally narrowed to a date window.
    pub fn list_notes(&self, date_filter: Option<&str>) -> MemoResult<()> {
        let mut notes = self.store.read_all()?;
        if let Some(raw) = date_filter {
            notes = search::filter_by_date(notes, raw);
        }

        if notes.is_empty() {
            match date_filter {
                Some(raw) => println!("No notes found for {raw}."),
                None => println!("No notes yet. Add your first one with --add."),
            }
            return Ok(());
        }

        match date_filter {
            Some(raw) => println!("Found {} notes for {raw}:", notes.len()),
            None => println!("Found {} notes:", notes.len()),
        }

        for note in &notes {
            println!("ID: {}", note.id.unwrap_or_default());
            println!("Title: {}", note.title);
            println!("Content: {}", note.content);
            println!("Created: {}", minutes(&note.created_at));
            println!("{}", "-".repeat(30));
        }

        Ok(())
    }

    /// Prints the notes matching a text query, optionally narrowed to a
    /// date window.
    ///
    /// Returns [`CommandError::EmptyQuery`] when the query is empty.
    pub fn search_notes(&self, query: &str, date_filter: Option<&str>) -> MemoResult<()> {
        if query.is_empty() {
            return Err(CommandError::EmptyQuery.into());
        }

        let mut notes = self.store.search(query)?;
        if let Some(raw) = date_filter {
            notes = search::filter_by_date(notes, raw);
        }

        if notes.is_empty() {
            match date_filter {
                Some(raw) => println!("Nothing found for {query:?} within {raw}."),
                None => println!("Nothing found for {query:?}."),
            }
            return Ok(());
        }

        match date_filter {
            Some(raw) => println!("Found {} notes for {query:?} within {raw}:", notes.len()),
            None => println!("Found {} notes for {query:?}:", notes.len()),
        }

        for note in &notes {
            println!("ID: {} - {}", note.id.unwrap_or_default(), note.title);
            println!("   {}...", preview(&note.content));
        }

        Ok(())
    }

    /// Deletes a note by id, reporting whether it existed.
    pub fn delete_note(&self, id: u64) -> MemoResult<()> {
        if self.store.delete(id)? {
            println!("Deleted note {id}");
        } else {
            println!("Note {id} not found");
        }

        Ok(())
    }
}

/// Creation time truncated to minutes for listing output.
fn minutes(created_at: &str) -> &str {
    created_at.get(..16).unwrap_or(created_at)
}

/// First 60 characters of the content, enough to recognize a note in
/// search output.
fn preview(content: &str) -> String {
    content.chars().take(60).collect()
}
