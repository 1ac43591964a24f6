//! In-memory store for tests and local development.
//!
//! Selected with `DATABASE_URL=memory://`. Enforces the same constraints as
//! the PostgreSQL schema: unique usernames and emails, notes must belong to
//! an existing user, and deleting a user removes their notes.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::{NewNote, NewUser, NoteChanges, NotePage, NoteQuery, NoteRow, UserRow};
use crate::repository::{NoteRepository, UserRepository};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, UserRow>,
    notes: HashMap<Uuid, NoteRow>,
}

/// Repository backed by process memory. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a user and, like `ON DELETE CASCADE`, all of their notes.
    pub async fn delete_user(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .users
            .remove(&id)
            .ok_or(StoreError::UserNotFound(id))?;
        tables.notes.retain(|_, note| note.user_id != id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert_user(&self, user: &NewUser) -> StoreResult<UserRow> {
        let mut tables = self.tables.write().await;
        for existing in tables.users.values() {
            if existing.username == user.username {
                return Err(StoreError::DuplicateUser { field: "username" });
            }
            if existing.email == user.email {
                return Err(StoreError::DuplicateUser { field: "email" });
            }
        }

        let row = UserRow {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            created: user.created,
        };
        tables.users.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<UserRow>> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn user_exists(&self, username: &str, email: &str) -> StoreResult<bool> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .any(|u| u.username == username || u.email == email))
    }
}

#[async_trait]
impl NoteRepository for MemoryStore {
    async fn insert_note(&self, note: &NewNote) -> StoreResult<NoteRow> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&note.user_id) {
            return Err(StoreError::UserNotFound(note.user_id));
        }

        let row = NoteRow {
            id: note.id,
            title: note.title.clone(),
            description: note.description.clone(),
            category: note.category.clone(),
            last_updated: note.last_updated,
            last_updated_by: note.last_updated_by.clone(),
            user_id: note.user_id,
        };
        tables.notes.insert(row.id, row.clone());
        Ok(row)
    }

    async fn get_note(&self, owner: Uuid, id: Uuid) -> StoreResult<NoteRow> {
        self.tables
            .read()
            .await
            .notes
            .get(&id)
            .filter(|n| n.user_id == owner)
            .cloned()
            .ok_or(StoreError::NoteNotFound(id))
    }

    async fn update_note(
        &self,
        owner: Uuid,
        id: Uuid,
        changes: &NoteChanges,
    ) -> StoreResult<NoteRow> {
        let mut tables = self.tables.write().await;
        let note = tables
            .notes
            .get_mut(&id)
            .filter(|n| n.user_id == owner)
            .ok_or(StoreError::NoteNotFound(id))?;

        note.title = changes.title.clone();
        note.description = changes.description.clone();
        note.category = changes.category.clone();
        note.last_updated = changes.last_updated;
        note.last_updated_by = changes.last_updated_by.clone();
        Ok(note.clone())
    }

    async fn delete_note(&self, owner: Uuid, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let owned = tables.notes.get(&id).is_some_and(|n| n.user_id == owner);
        if !owned {
            return Err(StoreError::NoteNotFound(id));
        }
        tables.notes.remove(&id);
        Ok(())
    }

    async fn list_notes(&self, query: &NoteQuery) -> StoreResult<NotePage> {
        let tables = self.tables.read().await;
        let mut matching: Vec<&NoteRow> = tables
            .notes
            .values()
            .filter(|n| n.user_id == query.user_id)
            .filter(|n| match &query.category {
                Some(category) => n.category.as_ref() == Some(category),
                None => true,
            })
            .collect();
        matching.sort_by_key(|n| Reverse((n.last_updated, n.id)));

        let total_count = matching.len() as i64;
        let offset = usize::try_from(query.page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.page.limit()).unwrap_or(0);
        let rows = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(NotePage { rows, total_count })
    }

    async fn list_categories(&self, owner: Uuid) -> StoreResult<Vec<String>> {
        let tables = self.tables.read().await;
        let categories: BTreeSet<&String> = tables
            .notes
            .values()
            .filter(|n| n.user_id == owner)
            .filter_map(|n| n.category.as_ref())
            .filter(|c| !c.is_empty())
            .collect();
        Ok(categories.into_iter().cloned().collect())
    }
}
