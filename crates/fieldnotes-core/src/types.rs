//! Core data types for Field Notes.
//!
//! This module defines the identifiers and records shared by the store,
//! the server and the client:
//!
//! - `UserId` / `NoteId`: UUID newtypes so the two cannot be mixed up
//! - `Principal`: the verified identity behind an authenticated request
//! - `Note` / `NoteDetails`: a note as returned to its owner
//!
//! All wire types serialize with camelCase field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Error returned when an identifier string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id '{value}': expected a UUID")]
pub struct IdParseError {
    /// Which kind of identifier was being parsed ("note", "user").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Unique identifier for a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Creates a new random UserId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a UserId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self).map_err(|_| IdParseError {
            kind: "user",
            value: s.to_string(),
        })
    }
}

/// Unique identifier for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Creates a new random NoteId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a NoteId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// True for the all-zero UUID, which never names a stored note.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self).map_err(|_| IdParseError {
            kind: "note",
            value: s.to_string(),
        })
    }
}

// ============================================================================
// Identity
// ============================================================================

/// The authenticated caller of a request.
///
/// Produced once per request from a verified bearer token and passed
/// explicitly into every service call that needs ownership scoping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
}

// ============================================================================
// Notes
// ============================================================================

/// A note as stored, including its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Markdown body.
    pub description: Option<String>,
    pub category: Option<String>,
    pub last_updated: DateTime<Utc>,
    /// Username of whoever last created or edited the note.
    pub last_updated_by: String,
    pub user_id: UserId,
}

/// Detail projection of a note returned by single-note reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDetails {
    pub id: NoteId,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub last_updated: DateTime<Utc>,
    pub last_updated_by: String,
}

impl From<Note> for NoteDetails {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            description: note.description,
            category: note.category,
            last_updated: note.last_updated,
            last_updated_by: note.last_updated_by,
        }
    }
}
