//! # memo_core
//!
//! A small library for managing a personal note collection persisted in a
//! single flat JSON file, with text search and date-window filtering.
//!
//! ## Features
//!
//! - **Note management**: Create, list, and delete short text records with
//!   store-assigned sequential ids
//! - **Flat-file persistence**: The whole collection lives in one
//!   pretty-printed JSON array, rewritten atomically on every mutation
//! - **Text search**: Case-insensitive substring matching over titles and
//!   content
//! - **Date filtering**: Narrow a collection by `today`, `week`, `month`,
//!   or literal `YYYY-MM-DD` / `YYYY-MM` / `YYYY` windows
//! - **Forgiving loads**: A missing or corrupt backing file reads as an
//!   empty collection instead of an error
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use memo_core::note::Note;
//! use memo_core::store::NoteStore;
//!
//! # fn main() -> Result<(), memo_core::MemoError> {
//! // Open (or create) a collection
//! let store = NoteStore::open("notes.json")?;
//!
//! // Add a note; the store assigns its id
//! let saved = store.save(Note::new("Groceries", "eggs, flour, coffee"))?;
//! println!("saved with id {:?}", saved.id);
//!
//! // Find it again
//! let found = store.search("groceries")?;
//! assert_eq!(found.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`note`]**: The note entity and its serialized form
//! - **[`store`]**: Backing-file ownership, id assignment, search
//! - **[`search`]**: Date-filter grammar over loaded notes
//! - **[`commands`]**: User-facing operations with console output
//! - **[`error`]**: Unified error handling throughout the library
//!
//! All fallible operations return [`MemoResult<T>`] wrapping the unified
//! [`MemoError`] type, which converts automatically from each module's
//! error so `?` works throughout.

pub mod commands;
pub mod error;
pub mod note;
pub mod search;
pub mod store;

/// Re-exports the most commonly used types for convenience.
pub use error::{MemoError, MemoResult};
