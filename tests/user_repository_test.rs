//! Relational repository tests against in-memory SQLite.

mod common;

use std::collections::HashSet;
use std::time::Duration;

use user_crud::domain::{CreateUser, UpdateUser};
use user_crud::errors::AppError;

use common::sqlite_repository;

#[tokio::test]
async fn test_create_then_find_by_id() {
    let repo = sqlite_repository().await;

    let created = repo
        .create(CreateUser::new("John Doe", "john@example.com"))
        .await
        .unwrap();

    assert!(uuid::Uuid::parse_str(&created.id).is_ok());
    assert_eq!(created.created_at, created.updated_at);

    let found = repo.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(found.name, "John Doe");
    assert_eq!(found.email, "john@example.com");
    assert_eq!(found, created);
}

#[tokio::test]
async fn test_find_by_id_missing_returns_none() {
    let repo = sqlite_repository().await;

    let random = uuid::Uuid::new_v4().to_string();
    assert!(repo.find_by_id(&random).await.unwrap().is_none());
    // Not a UUID at all: still absent, never an error
    assert!(repo.find_by_id("nonexistent-id").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_all_returns_every_record() {
    let repo = sqlite_repository().await;
    assert!(repo.find_all().await.unwrap().is_empty());

    let mut created = HashSet::new();
    for i in 0..3 {
        let user = repo
            .create(CreateUser::new(format!("User {}", i), format!("user{}@example.com", i)))
            .await
            .unwrap();
        created.insert(user.id);
    }

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 3);
    let listed: HashSet<String> = all.into_iter().map(|u| u.id).collect();
    assert_eq!(listed, created);
}

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
    let repo = sqlite_repository().await;
    let created = repo
        .create(CreateUser::new("John Doe", "john@example.com"))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;

    let updated = repo
        .update(
            &created.id,
            UpdateUser {
                name: Some("Jane Doe".to_string()),
                email: None,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Jane Doe");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    // Returned value is the persisted post-update state
    let reloaded = repo.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(reloaded, updated);
}

#[tokio::test]
async fn test_update_missing_returns_none() {
    let repo = sqlite_repository().await;
    let result = repo
        .update(&uuid::Uuid::new_v4().to_string(), UpdateUser::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_returns_removed_record() {
    let repo = sqlite_repository().await;
    let created = repo
        .create(CreateUser::new("John Doe", "john@example.com"))
        .await
        .unwrap();

    let removed = repo.delete(&created.id).await.unwrap().unwrap();
    assert_eq!(removed, created);

    assert!(repo.find_by_id(&created.id).await.unwrap().is_none());
    assert!(repo.delete(&created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected_by_store() {
    let repo = sqlite_repository().await;
    repo.create(CreateUser::new("John Doe", "john@example.com"))
        .await
        .unwrap();

    let err = repo
        .create(CreateUser::new("Johnny", "john@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Database(_)));
    assert!(err.constraint_violation().is_some());
}

#[tokio::test]
async fn test_update_to_taken_email_is_rejected_by_store() {
    let repo = sqlite_repository().await;
    repo.create(CreateUser::new("John Doe", "john@example.com"))
        .await
        .unwrap();
    let other = repo
        .create(CreateUser::new("Jane Doe", "jane@example.com"))
        .await
        .unwrap();

    let err = repo
        .update(
            &other.id,
            UpdateUser {
                name: None,
                email: Some("john@example.com".to_string()),
            },
        )
        .await
        .unwrap_err();

    assert!(err.constraint_violation().is_some());
}
