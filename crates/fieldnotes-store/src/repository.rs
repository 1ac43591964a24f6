//! Repository traits implemented by every storage backend.
//!
//! The server holds these as `Arc<dyn ...>` so the same services run
//! against PostgreSQL in production and the in-memory store in tests.
//!
//! Every note operation takes the owning user's id. A note that exists
//! but belongs to someone else is reported as `NoteNotFound`, exactly
//! like a note that does not exist.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::{NewNote, NewUser, NoteChanges, NotePage, NoteQuery, NoteRow, UserRow};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user.
    ///
    /// Fails with `DuplicateUser` if the username or email is taken.
    async fn insert_user(&self, user: &NewUser) -> StoreResult<UserRow>;

    /// Look up a user by exact username.
    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<UserRow>>;

    /// True if any user has this username or this email.
    async fn user_exists(&self, username: &str, email: &str) -> StoreResult<bool>;
}

#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a note for `note.user_id`.
    async fn insert_note(&self, note: &NewNote) -> StoreResult<NoteRow>;

    /// Fetch one of the owner's notes.
    async fn get_note(&self, owner: Uuid, id: Uuid) -> StoreResult<NoteRow>;

    /// Replace the writable fields of one of the owner's notes.
    async fn update_note(&self, owner: Uuid, id: Uuid, changes: &NoteChanges)
    -> StoreResult<NoteRow>;

    /// Delete one of the owner's notes.
    async fn delete_note(&self, owner: Uuid, id: Uuid) -> StoreResult<()>;

    /// One page of the owner's notes, newest first, plus the total match count.
    ///
    /// Ties on `last_updated` are broken by id, descending, so paging is stable.
    async fn list_notes(&self, query: &NoteQuery) -> StoreResult<NotePage>;

    /// Distinct non-null categories across the owner's notes, sorted ascending.
    async fn list_categories(&self, owner: Uuid) -> StoreResult<Vec<String>>;
}
