use memo_core::MemoError;
use memo_core::commands::{CommandError, NoteCommands};
use memo_core::store::NoteStore;
use tempfile::TempDir;

#[test]
fn add_rejects_a_missing_title_or_content() {
    let dir = TempDir::new().unwrap();
    let store = NoteStore::open(dir.path().join("notes.json")).unwrap();
    let commands = NoteCommands::new(&store);

    let no_title = commands.add_note("", "content");
    assert!(matches!(
        no_title,
        Err(MemoError::Command(CommandError::MissingFields))
    ));

    let no_content = commands.add_note("title", "");
    assert!(matches!(
        no_content,
        Err(MemoError::Command(CommandError::MissingFields))
    ));

    // nothing may have been persisted
    assert!(store.read_all().unwrap().is_empty());
}

#[test]
fn search_rejects_an_empty_query() {
    let dir = TempDir::new().unwrap();
    let store = NoteStore::open(dir.path().join("notes.json")).unwrap();
    let commands = NoteCommands::new(&store);

    let result = commands.search_notes("", None);
    assert!(matches!(
        result,
        Err(MemoError::Command(CommandError::EmptyQuery))
    ));
}

#[test]
fn add_then_delete_leaves_the_remaining_note() -> Result<(), MemoError> {
    let dir = TempDir::new()?;
    let store = NoteStore::open(dir.path().join("notes.json"))?;
    let commands = NoteCommands::new(&store);

    commands.add_note("A", "B")?;
    commands.add_note("C", "D")?;

    let ids: Vec<_> = store.read_all()?.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![Some(1), Some(2)]);

    commands.delete_note(1)?;

    let remaining = store.read_all()?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, Some(2));
    assert_eq!(remaining[0].title, "C");

    Ok(())
}

#[test]
fn deleting_a_missing_note_is_not_an_error() -> Result<(), MemoError> {
    let dir = TempDir::new()?;
    let store = NoteStore::open(dir.path().join("notes.json"))?;
    let commands = NoteCommands::new(&store);

    commands.delete_note(42)?;

    Ok(())
}

#[test]
fn list_and_search_accept_a_date_filter() -> Result<(), MemoError> {
    let dir = TempDir::new()?;
    let store = NoteStore::open(dir.path().join("notes.json"))?;
    let commands = NoteCommands::new(&store);

    commands.add_note("Grocery List", "eggs")?;

    // both paths exercise filter_by_date over live data; neither may fail
    commands.list_notes(Some("today"))?;
    commands.search_notes("grocery", Some("week"))?;
    commands.list_notes(Some("not-a-window"))?;

    Ok(())
}
