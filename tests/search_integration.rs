use memo_core::MemoError;
use memo_core::note::Note;
use memo_core::store::NoteStore;
use tempfile::TempDir;

#[test]
fn search_is_case_insensitive_on_titles() -> Result<(), MemoError> {
    let dir = TempDir::new()?;
    let store = NoteStore::open(dir.path().join("notes.json"))?;

    store.save(Note::new("Grocery List", "buy eggs"))?;

    let found = store.search("grocery")?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Grocery List");

    Ok(())
}

#[test]
fn search_matches_content_as_well_as_title() -> Result<(), MemoError> {
    let dir = TempDir::new()?;
    let store = NoteStore::open(dir.path().join("notes.json"))?;

    store.save(Note::new("Shopping", "Buy EGGS and flour"))?;

    let found = store.search("eggs")?;
    assert_eq!(found.len(), 1);

    Ok(())
}

#[test]
fn search_preserves_collection_order() -> Result<(), MemoError> {
    let dir = TempDir::new()?;
    let store = NoteStore::open(dir.path().join("notes.json"))?;

    store.save(Note::new("rust book", "chapter one"))?;
    store.save(Note::new("cooking", "nothing relevant"))?;
    store.save(Note::new("rust talk", "borrow checker"))?;

    let found = store.search("rust")?;
    let ids: Vec<_> = found.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![Some(1), Some(3)]);

    Ok(())
}

#[test]
fn search_with_no_match_returns_empty() -> Result<(), MemoError> {
    let dir = TempDir::new()?;
    let store = NoteStore::open(dir.path().join("notes.json"))?;

    store.save(Note::new("a", "b"))?;

    assert!(store.search("zzz")?.is_empty());

    Ok(())
}
