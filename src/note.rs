use chrono::Local;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Timestamp layout for `created_at`: local time, microsecond precision,
/// no zone offset. Kept as text end to end so a damaged timestamp never
/// blocks loading the collection.
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("malformed note entry: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A single user note, both the in-memory record and the shape of one
/// entry in the backing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// `None` only between construction and the first save; the store
    /// assigns the id and it never changes afterwards.
    #[serde(deserialize_with = "nullable_id")]
    pub id: Option<u64>,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl Note {
    /// Creates a not-yet-saved note with the creation time captured from
    /// the local clock.
    ///
    /// No validation happens here; rejecting empty titles or content is
    /// the command layer's job.
    pub fn new(title: &str, content: &str) -> Note {
        Note {
            id: None,
            title: title.to_owned(),
            content: content.to_owned(),
            created_at: Local::now().format(CREATED_AT_FORMAT).to_string(),
        }
    }

    /// Rebuilds a note from one stored entry, taking every field exactly
    /// as persisted.
    ///
    /// Returns [`NoteError::Malformed`] when a required key is missing or
    /// has the wrong type.
    pub fn from_value(value: serde_json::Value) -> Result<Note, NoteError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// The `id` key must be present in a stored entry even though its value is
/// nullable; a bare `Option` field would quietly read a missing key as
/// `None` instead of failing.
fn nullable_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer)
}
