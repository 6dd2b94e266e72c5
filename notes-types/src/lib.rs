//! Note data model
//!
//! These types are owned by the notes store and handed to the UI read-only.
//! Serializable with serde so a host can snapshot or seed the store as JSON.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Identity
// ============================================================================

/// Opaque, stable identifier for a note
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NoteId(pub String);

impl NoteId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ============================================================================
// Notes
// ============================================================================

/// A user-authored text item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: NoteId,
    /// Free-form text, may span multiple lines
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a note with a fresh id, stamped now
    pub fn new(body: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: NoteId::new(),
            body: body.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(id: impl Into<NoteId>, body: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            body: body.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
