/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the authenticator

use carplant_core::auth::{hash_password, login};
use carplant_core::error::CoreError;
use entity::*;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

#[test]
fn test_hash_password_is_deterministic() {
    assert_eq!(hash_password("password"), hash_password("password"));
    assert_eq!(
        hash_password("password"),
        "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
    );
}

#[test]
fn test_hash_password_is_sensitive_to_single_characters() {
    assert_ne!(hash_password("password"), hash_password("Password"));
    assert_ne!(hash_password("password"), hash_password("password "));
    assert_eq!(hash_password("password").len(), 64);
}

#[tokio::test]
async fn test_login_rejects_empty_input_before_any_query() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let result = login(&db, "", "secret").await;
    assert!(matches!(result, Err(CoreError::InvalidInput(_))));

    let result = login(&db, "operator", "").await;
    assert!(matches!(result, Err(CoreError::InvalidInput(_))));

    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn test_login_success_resolves_role() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user::Model {
            id: 7,
            login: "operator".to_owned(),
            password_hash: hash_password("secret"),
            role_id: 2,
        }]])
        .append_query_results([vec![role::Model {
            id: 2,
            role_name: "Operator".to_owned(),
        }]])
        .into_connection();

    let session = login(&db, "operator", "secret").await.unwrap();
    assert_eq!(session.user_id, 7);
    assert_eq!(session.login, "operator");
    assert_eq!(session.role, "Operator");
}

#[tokio::test]
async fn test_login_no_match_is_invalid_credentials() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    let result = login(&db, "operator", "wrong-password").await;
    assert!(matches!(result, Err(CoreError::InvalidCredentials)));
}

#[tokio::test]
async fn test_login_missing_role_is_invalid_credentials() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user::Model {
            id: 7,
            login: "operator".to_owned(),
            password_hash: hash_password("secret"),
            role_id: 2,
        }]])
        .append_query_results([Vec::<role::Model>::new()])
        .into_connection();

    let result = login(&db, "operator", "secret").await;
    assert!(matches!(result, Err(CoreError::InvalidCredentials)));
}

#[tokio::test]
async fn test_login_backend_error_is_backend_unavailable() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
            "connection refused".to_owned(),
        ))])
        .into_connection();

    let result = login(&db, "operator", "secret").await;
    assert!(matches!(result, Err(CoreError::BackendUnavailable(_))));
}
