/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the access-controlled record store

use carplant_core::error::CoreError;
use carplant_core::store::{delete, insert, list, update, Resource};
use carplant_core::types::Session;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, MockExecResult, RuntimeErr, Value,
};
use std::collections::BTreeMap;

fn session(role: &str) -> Session {
    Session {
        user_id: 1,
        login: "tester".to_owned(),
        role: role.to_owned(),
    }
}

fn count_row(count: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::BigInt(Some(count)))])
}

fn transaction_log(db: DatabaseConnection) -> String {
    // `Debug` escapes the quotes inside each statement's SQL (`"` -> `\"`);
    // unescape them so the raw-string substring assertions below match the
    // SQL as generated.
    format!("{:?}", db.into_transaction_log()).replace("\\\"", "\"")
}

#[test]
fn test_resource_allow_list() {
    assert_eq!(Resource::ALL.len(), 7);

    for resource in Resource::ALL {
        assert_eq!(Resource::from_name(resource.table()), Some(resource));
    }

    assert_eq!(Resource::from_name("users"), None);
    assert_eq!(Resource::from_name("Employees"), None);
    assert_eq!(Resource::from_name("employees; DROP TABLE users"), None);
    assert_eq!(Resource::from_name(""), None);
}

#[test]
fn test_resource_headers_start_with_id() {
    for resource in Resource::ALL {
        let header = resource.header();
        assert_eq!(header[0], "id");
        assert_eq!(header.len(), resource.fields().len() + 1);
    }

    assert_eq!(
        Resource::Employees.header(),
        vec!["id", "name", "position", "department", "hire_date", "salary"]
    );
    assert_eq!(
        Resource::CarTypes.header(),
        vec!["id", "type_name", "description", "category"]
    );
}

#[tokio::test]
async fn test_list_renders_rows_in_column_order() {
    let employee = BTreeMap::from([
        ("id", Value::from("1")),
        ("name", Value::from("Anna Koch")),
        ("position", Value::from("Fitter")),
        ("department", Value::from("Assembly")),
        ("hire_date", Value::from("2023-04-01")),
        ("salary", Value::from("41000.00")),
    ]);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(1)]])
        .append_query_results([vec![employee]])
        .into_connection();

    let rows = list(&db, &session("Manager"), Resource::Employees)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        vec![
            Some("1".to_owned()),
            Some("Anna Koch".to_owned()),
            Some("Fitter".to_owned()),
            Some("Assembly".to_owned()),
            Some("2023-04-01".to_owned()),
            Some("41000.00".to_owned()),
        ]
    );

    let log = transaction_log(db);
    assert!(log.contains(r#"FROM "employees""#));
    assert!(log.contains(r#"ORDER BY "id""#));
    assert!(log.contains("CAST("));
}

#[tokio::test]
async fn test_insert_binds_values_with_typed_casts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(1)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 3,
            rows_affected: 1,
        }])
        .into_connection();

    let values = vec![
        "Anna Koch".to_owned(),
        "Fitter".to_owned(),
        "Assembly".to_owned(),
        "2023-04-01".to_owned(),
        "41000.00".to_owned(),
    ];
    insert(&db, &session("Manager"), Resource::Employees, &values)
        .await
        .unwrap();

    let log = transaction_log(db);
    // The column list starts at "name": id is backend-assigned.
    assert!(log.contains(r#"INSERT INTO "employees" ("name""#));
    assert!(log.contains("AS date"));
    assert!(log.contains("AS numeric"));
}

#[tokio::test]
async fn test_insert_rejects_wrong_value_count() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(1)]])
        .into_connection();

    let values = vec!["Anna Koch".to_owned(), "Fitter".to_owned()];
    let result = insert(&db, &session("Manager"), Resource::Employees, &values).await;
    assert!(matches!(result, Err(CoreError::InvalidInput(_))));

    let log = transaction_log(db);
    assert!(!log.contains("INSERT"));
}

#[tokio::test]
async fn test_insert_backend_rejection_is_constraint_violation() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(1)]])
        .append_exec_errors([DbErr::Query(RuntimeErr::Internal(
            "invalid input syntax for type integer".to_owned(),
        ))])
        .into_connection();

    let values = vec![
        "not-a-number".to_owned(),
        "1".to_owned(),
        "2024-02-01".to_owned(),
        "5".to_owned(),
        "planned".to_owned(),
    ];
    let result = insert(&db, &session("Manager"), Resource::Production, &values).await;
    assert!(matches!(result, Err(CoreError::ConstraintViolation(_))));
}

#[tokio::test]
async fn test_insert_connection_error_is_backend_unavailable() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(1)]])
        .append_exec_errors([DbErr::Conn(RuntimeErr::Internal(
            "connection refused".to_owned(),
        ))])
        .into_connection();

    let values = vec![
        "Sedan".to_owned(),
        "comfortable".to_owned(),
        "passenger".to_owned(),
    ];
    let result = insert(&db, &session("Manager"), Resource::CarTypes, &values).await;
    assert!(matches!(result, Err(CoreError::BackendUnavailable(_))));
}

#[tokio::test]
async fn test_update_reports_affected_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(1)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let values = vec![
        "Sedan".to_owned(),
        "comfortable".to_owned(),
        "passenger".to_owned(),
    ];
    let affected = update(&db, &session("Manager"), Resource::CarTypes, &values, 4)
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let log = transaction_log(db);
    assert!(log.contains(r#"UPDATE "car_types""#));
    assert!(log.contains(r#""id""#));
}

#[tokio::test]
async fn test_update_of_missing_id_affects_zero_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(1)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let values = vec![
        "Sedan".to_owned(),
        "comfortable".to_owned(),
        "passenger".to_owned(),
    ];
    let affected = update(&db, &session("Manager"), Resource::CarTypes, &values, 999)
        .await
        .unwrap();
    assert_eq!(affected, 0);
}

#[tokio::test]
async fn test_delete_of_missing_id_is_a_no_op() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(1)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let affected = delete(&db, &session("Manager"), Resource::Sales, 999)
        .await
        .unwrap();
    assert_eq!(affected, 0);
}

#[tokio::test]
async fn test_denied_delete_never_reaches_the_backend() {
    // Operator lacks delete_employees: the gate must refuse before any
    // delete statement is built.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(0)]])
        .into_connection();

    let result = delete(&db, &session("Operator"), Resource::Employees, 1).await;
    assert!(matches!(result, Err(CoreError::PermissionDenied(_))));

    let log = transaction_log(db);
    assert!(!log.contains("DELETE"));
}

#[tokio::test]
async fn test_unreachable_permission_check_denies_the_operation() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
            "connection refused".to_owned(),
        ))])
        .into_connection();

    let result = list(&db, &session("Manager"), Resource::Models).await;
    assert!(matches!(result, Err(CoreError::PermissionDenied(_))));

    let log = transaction_log(db);
    assert!(!log.contains(r#"FROM "models""#));
}
