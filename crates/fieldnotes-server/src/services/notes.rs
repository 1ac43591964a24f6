//! Note CRUD scoped to the calling user.

use std::sync::Arc;

use fieldnotes_core::{
    Clock, Note, NoteContent, NoteDetails, NoteId, PageRequest, PagedResult, Principal,
};
use fieldnotes_store::{NewNote, NoteChanges, NoteQuery, NoteRepository};

use crate::error::{ApiError, ApiResult};

pub struct NoteService {
    notes: Arc<dyn NoteRepository>,
    clock: Arc<dyn Clock>,
}

fn require_id(id: NoteId) -> ApiResult<NoteId> {
    if id.is_nil() {
        return Err(ApiError::Validation("note id is required".to_string()));
    }
    Ok(id)
}

impl NoteService {
    pub fn new(notes: Arc<dyn NoteRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { notes, clock }
    }

    pub async fn create(&self, caller: &Principal, content: NoteContent) -> ApiResult<Note> {
        let row = self
            .notes
            .insert_note(&NewNote {
                id: *NoteId::new().as_uuid(),
                user_id: *caller.user_id.as_uuid(),
                title: content.title,
                description: content.description,
                category: content.category,
                last_updated: self.clock.now(),
                last_updated_by: caller.username.clone(),
            })
            .await?;

        tracing::info!(user_id = %caller.user_id, note_id = %row.id, "Note created");
        Ok(row.into())
    }

    /// Overwrite title, description and category. Absent optionals are cleared.
    pub async fn update(
        &self,
        caller: &Principal,
        id: NoteId,
        content: NoteContent,
    ) -> ApiResult<Note> {
        let id = require_id(id)?;
        let row = self
            .notes
            .update_note(
                *caller.user_id.as_uuid(),
                *id.as_uuid(),
                &NoteChanges {
                    title: content.title,
                    description: content.description,
                    category: content.category,
                    last_updated: self.clock.now(),
                    last_updated_by: caller.username.clone(),
                },
            )
            .await?;

        tracing::info!(user_id = %caller.user_id, note_id = %id, "Note updated");
        Ok(row.into())
    }

    pub async fn delete(&self, caller: &Principal, id: NoteId) -> ApiResult<()> {
        let id = require_id(id)?;
        self.notes
            .delete_note(*caller.user_id.as_uuid(), *id.as_uuid())
            .await?;

        tracing::info!(user_id = %caller.user_id, note_id = %id, "Note deleted");
        Ok(())
    }

    pub async fn get_by_id(&self, caller: &Principal, id: NoteId) -> ApiResult<NoteDetails> {
        let id = require_id(id)?;
        let row = self
            .notes
            .get_note(*caller.user_id.as_uuid(), *id.as_uuid())
            .await?;
        Ok(Note::from(row).into())
    }

    /// One page of the caller's notes, newest first.
    ///
    /// An empty or absent category lists everything.
    pub async fn get_all(
        &self,
        caller: &Principal,
        page: PageRequest,
        category: Option<String>,
    ) -> ApiResult<PagedResult<Note>> {
        let query = NoteQuery::new(*caller.user_id.as_uuid(), category, page);
        let result = self.notes.list_notes(&query).await?;

        tracing::debug!(
            user_id = %caller.user_id,
            total = result.total_count,
            page = page.page_number(),
            "Listed notes"
        );
        Ok(PagedResult::new(result.rows, result.total_count, page).map(Note::from))
    }

    pub async fn get_categories(&self, caller: &Principal) -> ApiResult<Vec<String>> {
        Ok(self
            .notes
            .list_categories(*caller.user_id.as_uuid())
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use fieldnotes_core::{SteppingClock, UserId};
    use fieldnotes_store::{MemoryStore, NewUser, UserRepository};
    use uuid::Uuid;

    async fn setup() -> (NoteService, Principal, Principal) {
        let store = MemoryStore::new();
        let mut principals = Vec::new();
        for name in ["alice", "bob"] {
            let row = store
                .insert_user(&NewUser {
                    id: Uuid::new_v4(),
                    username: name.to_string(),
                    email: format!("{}@example.com", name),
                    password_hash: "hash".to_string(),
                    created: Utc::now(),
                })
                .await
                .unwrap();
            principals.push(Principal {
                user_id: UserId::from_uuid(row.id),
                username: row.username,
                email: row.email,
            });
        }
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let clock = Arc::new(SteppingClock::new(start, Duration::seconds(1)));
        let svc = NoteService::new(Arc::new(store), clock);
        let bob = principals.pop().unwrap();
        let alice = principals.pop().unwrap();
        (svc, alice, bob)
    }

    fn content(title: &str, description: Option<&str>, category: Option<&str>) -> NoteContent {
        NoteContent::new(
            Some(title),
            description.map(str::to_string),
            category.map(str::to_string),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let (svc, alice, _) = setup().await;
        let created = svc
            .create(&alice, content("Groceries", Some("- milk"), Some("Home")))
            .await
            .unwrap();
        assert_eq!(created.title, "Groceries");
        assert_eq!(created.last_updated_by, "alice");
        assert_eq!(created.user_id, alice.user_id);

        let details = svc.get_by_id(&alice, created.id).await.unwrap();
        assert_eq!(details, NoteDetails::from(created));
    }

    #[tokio::test]
    async fn test_update_is_full_overwrite() {
        let (svc, alice, _) = setup().await;
        let created = svc
            .create(&alice, content("Draft", Some("body"), Some("Work")))
            .await
            .unwrap();

        let updated = svc
            .update(&alice, created.id, content("Final", None, None))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Final");
        assert_eq!(updated.description, None);
        assert_eq!(updated.category, None);
        assert!(updated.last_updated > created.last_updated);
    }

    #[tokio::test]
    async fn test_missing_note_is_not_found() {
        let (svc, alice, _) = setup().await;
        let id = NoteId::new();

        assert!(matches!(
            svc.get_by_id(&alice, id).await,
            Err(ApiError::Store(fieldnotes_store::StoreError::NoteNotFound(_)))
        ));
        assert!(svc.update(&alice, id, content("x", None, None)).await.is_err());
        assert!(svc.delete(&alice, id).await.is_err());
    }

    #[tokio::test]
    async fn test_nil_id_is_validation_error() {
        let (svc, alice, _) = setup().await;
        let nil = NoteId::from_uuid(Uuid::nil());
        assert!(matches!(
            svc.get_by_id(&alice, nil).await,
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(svc.delete(&alice, nil).await, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_other_users_notes_are_invisible() {
        let (svc, alice, bob) = setup().await;
        let note = svc
            .create(&alice, content("Private", None, Some("Secret")))
            .await
            .unwrap();

        assert!(svc.get_by_id(&bob, note.id).await.is_err());
        assert!(svc.delete(&bob, note.id).await.is_err());
        let page = svc.get_all(&bob, PageRequest::default(), None).await.unwrap();
        assert_eq!(page.total_count, 0);
        assert!(svc.get_categories(&bob).await.unwrap().is_empty());

        assert!(svc.get_by_id(&alice, note.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_second_page_of_fifteen() {
        let (svc, alice, _) = setup().await;
        for i in 1..=15 {
            svc.create(&alice, content(&format!("Note {}", i), None, None))
                .await
                .unwrap();
        }

        let page = svc
            .get_all(&alice, PageRequest::normalize(Some(2), Some(5)), None)
            .await
            .unwrap();
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total_count, 15);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items[0].title, "Note 10");
        assert!(page.has_next_page);
        assert!(page.has_previous_page);
    }

    #[tokio::test]
    async fn test_category_filter_and_listing() {
        let (svc, alice, _) = setup().await;
        svc.create(&alice, content("a", None, Some("Work"))).await.unwrap();
        svc.create(&alice, content("b", None, Some("Personal"))).await.unwrap();
        svc.create(&alice, content("c", None, Some("Work"))).await.unwrap();
        svc.create(&alice, content("d", None, Some(""))).await.unwrap();
        svc.create(&alice, content("e", None, None)).await.unwrap();

        let work = svc
            .get_all(&alice, PageRequest::default(), Some("Work".into()))
            .await
            .unwrap();
        assert_eq!(work.total_count, 2);
        assert!(work.items.iter().all(|n| n.category.as_deref() == Some("Work")));

        let lower = svc
            .get_all(&alice, PageRequest::default(), Some("work".into()))
            .await
            .unwrap();
        assert_eq!(lower.total_count, 0);

        let all = svc
            .get_all(&alice, PageRequest::default(), Some(String::new()))
            .await
            .unwrap();
        assert_eq!(all.total_count, 5);

        assert_eq!(
            svc.get_categories(&alice).await.unwrap(),
            vec!["Personal".to_string(), "Work".to_string()]
        );
    }

    #[tokio::test]
    async fn test_categories_empty_without_notes() {
        let (svc, alice, _) = setup().await;
        assert!(svc.get_categories(&alice).await.unwrap().is_empty());
        svc.create(&alice, content("plain", None, None)).await.unwrap();
        assert!(svc.get_categories(&alice).await.unwrap().is_empty());
    }
}
