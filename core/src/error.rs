/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::DbErr;
use thiserror::Error;

/// Every failure the record store and authenticator can surface. Raw
/// backend errors never cross this boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("permission denied: missing '{0}'")]
    PermissionDenied(String),
}

impl CoreError {
    /// Classify a failed read statement. Reads have no constraint
    /// surface, so any failure means the backend could not answer.
    pub fn from_query(err: DbErr) -> Self {
        CoreError::BackendUnavailable(err.to_string())
    }

    /// Classify a failed write statement. Connection-level failures mean
    /// the backend is unreachable; anything else is the backend rejecting
    /// the row (typing, uniqueness, NOT NULL, foreign keys).
    pub fn from_exec(err: DbErr) -> Self {
        match &err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                CoreError::BackendUnavailable(err.to_string())
            }
            _ => CoreError::ConstraintViolation(err.to_string()),
        }
    }
}
