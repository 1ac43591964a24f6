//! Tests against a live PostgreSQL database.
//!
//! Run with:
//! `DATABASE_URL=postgres://... cargo test -p fieldnotes-store --features integration-tests`

#![cfg(feature = "integration-tests")]

use chrono::{Duration, Utc};
use fieldnotes_core::PageRequest;
use fieldnotes_store::{
    NewNote, NewUser, NoteChanges, NoteQuery, NoteRepository, Store, StoreConfig, StoreError,
    UserRepository,
};
use uuid::Uuid;

async fn connect() -> Store {
    let config = StoreConfig::from_env().expect("DATABASE_URL must be set");
    Store::connect(config).await.expect("failed to connect")
}

fn unique_user() -> NewUser {
    let suffix = &Uuid::new_v4().simple().to_string()[..12];
    NewUser {
        id: Uuid::new_v4(),
        username: format!("u{}", suffix),
        email: format!("{}@example.com", suffix),
        password_hash: "hash".to_string(),
        created: Utc::now(),
    }
}

#[tokio::test]
async fn test_duplicate_username_maps_to_duplicate_user() {
    let store = connect().await;
    let user = unique_user();
    store.insert_user(&user).await.unwrap();

    let mut again = unique_user();
    again.username = user.username.clone();
    let err = store.insert_user(&again).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateUser { field: "username" }));

    let mut again = unique_user();
    again.email = user.email.clone();
    let err = store.insert_user(&again).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateUser { field: "email" }));
}

#[tokio::test]
async fn test_note_lifecycle_scoped_to_owner() {
    let store = connect().await;
    let owner = store.insert_user(&unique_user()).await.unwrap();
    let other = store.insert_user(&unique_user()).await.unwrap();

    let base = Utc::now();
    for i in 0..3 {
        store
            .insert_note(&NewNote {
                id: Uuid::new_v4(),
                user_id: owner.id,
                title: format!("Note {}", i),
                description: None,
                category: Some(if i == 0 { "Work" } else { "Personal" }.to_string()),
                last_updated: base + Duration::seconds(i),
                last_updated_by: owner.username.clone(),
            })
            .await
            .unwrap();
    }

    let query = NoteQuery::new(owner.id, None, PageRequest::normalize(Some(1), Some(2)));
    let page = store.list_notes(&query).await.unwrap();
    assert_eq!(page.total_count, 3);
    assert_eq!(page.rows.len(), 2);
    assert_eq!(page.rows[0].title, "Note 2");

    let query = NoteQuery::new(owner.id, Some("Work".into()), PageRequest::default());
    let page = store.list_notes(&query).await.unwrap();
    assert_eq!(page.total_count, 1);

    assert_eq!(
        store.list_categories(owner.id).await.unwrap(),
        vec!["Personal".to_string(), "Work".to_string()]
    );

    let target = page.rows[0].id;
    assert!(matches!(
        store.get_note(other.id, target).await,
        Err(StoreError::NoteNotFound(_))
    ));

    let changes = NoteChanges {
        title: "Renamed".to_string(),
        description: Some("# body".to_string()),
        category: None,
        last_updated: Utc::now(),
        last_updated_by: owner.username.clone(),
    };
    assert!(matches!(
        store.update_note(other.id, target, &changes).await,
        Err(StoreError::NoteNotFound(_))
    ));
    let updated = store.update_note(owner.id, target, &changes).await.unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.category, None);

    store.delete_note(owner.id, target).await.unwrap();
    assert!(matches!(
        store.delete_note(owner.id, target).await,
        Err(StoreError::NoteNotFound(_))
    ));
}

#[tokio::test]
async fn test_note_for_unknown_user_rejected() {
    let store = connect().await;
    let missing = Uuid::new_v4();
    let err = store
        .insert_note(&NewNote {
            id: Uuid::new_v4(),
            user_id: missing,
            title: "orphan".to_string(),
            description: None,
            category: None,
            last_updated: Utc::now(),
            last_updated_by: "nobody".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::UserNotFound(id) if id == missing));
}
