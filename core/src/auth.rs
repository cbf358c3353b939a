/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use sha2::{Digest, Sha256};

use super::error::CoreError;
use super::input::vec_to_hex;
use super::types::*;

/// Deterministic digest stored in and compared against
/// `users.password_hash`.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    vec_to_hex(hasher.finalize().as_slice())
}

pub async fn login(
    db: &DatabaseConnection,
    login: &str,
    password: &str,
) -> Result<Session, CoreError> {
    if login.is_empty() || password.is_empty() {
        return Err(CoreError::InvalidInput(
            "login and password must not be empty".to_string(),
        ));
    }

    let digest = hash_password(password);

    let user = EUser::find()
        .filter(CUser::Login.eq(login))
        .filter(CUser::PasswordHash.eq(digest))
        .one(db)
        .await
        .map_err(CoreError::from_query)?
        .ok_or(CoreError::InvalidCredentials)?;

    // An unknown login and a wrong password are indistinguishable on
    // purpose. A user whose role row is gone does not match either.
    let role = ERole::find_by_id(user.role_id)
        .one(db)
        .await
        .map_err(CoreError::from_query)?
        .ok_or(CoreError::InvalidCredentials)?;

    Ok(Session {
        user_id: user.id,
        login: user.login,
        role: role.role_name,
    })
}
