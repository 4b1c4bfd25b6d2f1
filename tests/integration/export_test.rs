//! User export against a seeded store.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use serde_json::{Value, json};

use allauth_database::MemoryStore;
use allauth_entity::{EmailAddress, SocialAccount, User, UserProfile};
use allauth_service::{ExportDestination, ExportService};

async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    let joined = Utc.with_ymd_and_hms(2019, 5, 1, 10, 20, 30).unwrap();

    let mut alice = User::new(1, "alice", joined);
    alice.password = "pbkdf2_sha256$150000$salt$hash".to_string();
    alice.first_name = "Alice".to_string();
    alice.last_name = "Müller".to_string();
    alice.email = "alice@example.com".to_string();
    alice.last_login = Some(joined + Duration::days(3) + Duration::microseconds(250));
    store.insert_user(alice).await;

    let mut carol = User::new(3, "carol", joined);
    carol.is_active = false;
    store.insert_user(carol).await;
    store.insert_user(User::new(2, "bob", joined)).await;

    store
        .insert_profile(UserProfile {
            user_id: 1,
            title: "Dr.".to_string(),
            institution: "EOX IT Services".to_string(),
            country: "AT".to_string(),
            study_area: String::new(),
            executive_summary: String::new(),
        })
        .await;
    store
        .insert_email_address(EmailAddress {
            id: 10,
            user_id: 1,
            email: "alice@example.com".to_string(),
            verified: true,
            primary: true,
        })
        .await;
    store
        .insert_social_account(SocialAccount {
            id: 20,
            user_id: 1,
            uid: "alice-gh".to_string(),
            provider: "github".to_string(),
            date_joined: joined,
            last_login: None,
            extra_data: json!({"login": "alice", "id": 42}),
        })
        .await;

    store
}

#[tokio::test]
async fn test_export_all_users_in_id_order() {
    let service = ExportService::new(Arc::new(seeded_store().await));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("all.json");

    let count = service
        .export(&[], &ExportDestination::File(path.clone()))
        .await
        .unwrap();
    assert_eq!(count, 3);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.ends_with('\n'));
    assert!(text.is_ascii());
    assert!(text.contains(r#""last_name": "M\u00fcller""#));

    let users: Vec<Value> = serde_json::from_str(&text).unwrap();
    let names: Vec<&str> = users
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alice", "bob", "carol"]);
    assert_eq!(users[2]["is_active"], json!(false));
}

#[tokio::test]
async fn test_export_full_record() {
    let service = ExportService::new(Arc::new(seeded_store().await));

    let users = service.collect(&["alice".to_string()]).await.unwrap();
    assert_eq!(
        users[0],
        json!({
            "username": "alice",
            "password": "pbkdf2_sha256$150000$salt$hash",
            "is_active": true,
            "date_joined": "2019-05-01T10:20:30+00:00",
            "last_login": "2019-05-04T10:20:30.000250+00:00",
            "first_name": "Alice",
            "last_name": "Müller",
            "email": "alice@example.com",
            "user_profile": {
                "title": "Dr.",
                "institution": "EOX IT Services",
                "country": "AT"
            },
            "email_addresses": [
                {"email": "alice@example.com", "verified": true, "primary": true}
            ],
            "social_accounts": [
                {
                    "uid": "alice-gh",
                    "provider": "github",
                    "date_joined": "2019-05-01T10:20:30+00:00",
                    "extra_data": {"login": "alice", "id": 42}
                }
            ]
        })
    );
}

#[tokio::test]
async fn test_unknown_username_is_skipped() {
    let service = ExportService::new(Arc::new(seeded_store().await));

    let users = service
        .collect(&["alice".to_string(), "ghost".to_string()])
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["username"], "alice");
}

#[tokio::test]
async fn test_only_unknown_usernames_yield_empty_array() {
    let service = ExportService::new(Arc::new(seeded_store().await));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");

    let count = service
        .export(&["ghost".to_string()], &ExportDestination::File(path.clone()))
        .await
        .unwrap();

    assert_eq!(count, 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}

#[tokio::test]
async fn test_repeated_export_is_byte_identical() {
    let service = ExportService::new(Arc::new(seeded_store().await));
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    service
        .export(&[], &ExportDestination::File(first.clone()))
        .await
        .unwrap();
    service
        .export(&[], &ExportDestination::File(second.clone()))
        .await
        .unwrap();

    assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
}
