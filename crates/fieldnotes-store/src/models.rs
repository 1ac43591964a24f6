//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for
//! sqlx queries. They are separate from the domain types in
//! fieldnotes-core so the wire format can evolve independently of
//! the schema.

use chrono::{DateTime, Utc};
use fieldnotes_core::{Note, NoteId, PageRequest, UserId};
use sqlx::FromRow;
use uuid::Uuid;

// ==================== Users ====================

/// Database row for the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Argon2 hash in PHC string format.
    pub password_hash: String,
    pub created: DateTime<Utc>,
}

/// Input for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created: DateTime<Utc>,
}

// ==================== Notes ====================

/// Database row for the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub last_updated: DateTime<Utc>,
    pub last_updated_by: String,
    pub user_id: Uuid,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: NoteId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            category: row.category,
            last_updated: row.last_updated,
            last_updated_by: row.last_updated_by,
            user_id: UserId::from_uuid(row.user_id),
        }
    }
}

/// Input for inserting a note. The caller chooses the id.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub last_updated: DateTime<Utc>,
    pub last_updated_by: String,
}

/// Full replacement of a note's writable fields.
///
/// `None` clears the column; there is no partial update.
#[derive(Debug, Clone)]
pub struct NoteChanges {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub last_updated: DateTime<Utc>,
    pub last_updated_by: String,
}

/// Filter and slice for listing one user's notes.
#[derive(Debug, Clone)]
pub struct NoteQuery {
    pub user_id: Uuid,
    /// Exact, case-sensitive category match. `None` means no filter.
    pub category: Option<String>,
    pub page: PageRequest,
}

impl NoteQuery {
    /// Build a query, treating an empty category as "no filter".
    pub fn new(user_id: Uuid, category: Option<String>, page: PageRequest) -> Self {
        Self {
            user_id,
            category: category.filter(|c| !c.is_empty()),
            page,
        }
    }
}

/// One page of note rows plus the unsliced match count.
#[derive(Debug, Clone)]
pub struct NotePage {
    pub rows: Vec<NoteRow>,
    pub total_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_query_empty_category_is_no_filter() {
        let query = NoteQuery::new(Uuid::new_v4(), Some(String::new()), PageRequest::default());
        assert!(query.category.is_none());

        let query = NoteQuery::new(Uuid::new_v4(), Some("Work".into()), PageRequest::default());
        assert_eq!(query.category.as_deref(), Some("Work"));
    }

    #[test]
    fn test_row_into_note() {
        let row = NoteRow {
            id: Uuid::new_v4(),
            title: "Title".into(),
            description: None,
            category: Some("Home".into()),
            last_updated: Utc::now(),
            last_updated_by: "carol".into(),
            user_id: Uuid::new_v4(),
        };
        let note = Note::from(row.clone());
        assert_eq!(note.id.as_uuid(), &row.id);
        assert_eq!(note.user_id.as_uuid(), &row.user_id);
        assert_eq!(note.category, row.category);
    }
}
