//! Flat-file persistence for the note collection.
//!
//! A [`NoteStore`] owns one backing file holding the entire collection as
//! a pretty-printed JSON array. Every mutation loads the whole file,
//! changes the in-memory copy, and rewrites it in full; there is no
//! coordination between processes. That is the intended scale: one local
//! user, one small file.

use crate::note::{Note, NoteError};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Note(#[from] NoteError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode note collection: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Storage for a note collection kept in a single JSON file.
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// Binds a store to the given backing file, creating the file with an
    /// empty collection when it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = NoteStore { path: path.into() };
        store.ensure_file()?;
        Ok(store)
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file holding an empty collection if it is
    /// missing. Idempotent; an existing file is left untouched.
    pub fn ensure_file(&self) -> Result<(), StoreError> {
        if !self.path.exists() {
            self.write_entries(&[])?;
            log::info!("created notes file: {}", self.path.display());
        }
        Ok(())
    }

    /// Loads every note in the collection, in stored order.
    ///
    /// A missing, unreadable, or syntactically invalid backing file reads
    /// as an empty collection (see [`NoteStore::open`] docs and
    /// `read_entries`). An entry inside a well-formed file that lacks a
    /// required key is not recovered; it fails the whole load with
    /// [`NoteError::Malformed`].
    pub fn read_all(&self) -> Result<Vec<Note>, StoreError> {
        self.read_entries()
            .into_iter()
            .map(|entry| Ok(Note::from_value(entry)?))
            .collect()
    }

    /// Saves a note, assigning the next free id when it has none.
    ///
    /// A fresh note gets `max(existing ids) + 1` (or 1 for an empty
    /// collection) and is appended. A note that already carries an id is
    /// not touched: nothing is appended and no existing entry is updated,
    /// the collection is simply rewritten as-is. Returns the note with its
    /// id populated.
    pub fn save(&self, mut note: Note) -> Result<Note, StoreError> {
        let mut entries = self.read_entries();

        if note.id.is_none() {
            let next_id = entries
                .iter()
                .filter_map(|entry| entry.get("id").and_then(Value::as_u64))
                .max()
                .unwrap_or(0)
                + 1;

            note.id = Some(next_id);
            entries.push(serde_json::to_value(&note)?);
            log::info!("saved note {next_id}");
        }

        self.write_entries(&entries)?;
        Ok(note)
    }

    /// Deletes the note with the given id.
    ///
    /// Removes every matching entry (ids are unique, so at most one),
    /// rewrites the file only when something was removed, and reports
    /// whether that happened. An unknown id is not an error.
    pub fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let entries = self.read_entries();
        let initial_len = entries.len();

        let remaining: Vec<Value> = entries
            .into_iter()
            .filter(|entry| entry.get("id").and_then(Value::as_u64) != Some(id))
            .collect();

        if remaining.len() < initial_len {
            self.write_entries(&remaining)?;
            log::info!("deleted note {id}");
            return Ok(true);
        }

        Ok(false)
    }

    /// Finds notes whose title or content contains `query`, ignoring
    /// case. Collection order is preserved; an empty query is the
    /// caller's concern.
    pub fn search(&self, query: &str) -> Result<Vec<Note>, StoreError> {
        let needle = query.to_lowercase();

        let matches: Vec<Note> = self
            .read_all()?
            .into_iter()
            .filter(|note| {
                note.title.to_lowercase().contains(&needle)
                    || note.content.to_lowercase().contains(&needle)
            })
            .collect();

        log::debug!("{} notes match {query:?}", matches.len());
        Ok(matches)
    }

    /// Raw entries from the backing file.
    ///
    /// This is the store's recoverability policy in one place: a file
    /// that is missing, unreadable, or not a JSON array reads as an empty
    /// collection, logged but never surfaced as an error.
    fn read_entries(&self) -> Vec<Value> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!(
                    "notes file {} unreadable ({e}), treating as empty",
                    self.path.display()
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!(
                    "notes file {} is not valid JSON ({e}), treating as empty",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Rewrites the backing file with the given entries.
    ///
    /// Writes to a temporary file in the same directory and renames it
    /// into place, so the backing file always holds a complete document.
    fn write_entries(&self, entries: &[Value]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(entries)?;

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(data.as_bytes())?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::Io(e.error))?;

        Ok(())
    }
}
