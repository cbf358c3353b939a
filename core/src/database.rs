/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, Database, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter,
};
use std::time::Duration;
use tracing::log::LevelFilter;

use super::consts::{ADMIN_ROLE_NAME, PERMISSION_NAMES};
use super::input::load_secret;
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let password = if let Some(file) = &cli.db_password_file {
        load_secret(file).context("Failed to read database password from file")?
    } else if let Some(password) = &cli.db_password {
        password.clone()
    } else {
        anyhow::bail!("No database password provided")
    };

    let db_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        cli.db_user, password, cli.db_host, cli.db_port, cli.db_name
    );

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(16)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    seed_reference_data(&db)
        .await
        .context("Failed to seed reference data")?;

    tracing::info!(
        "Connected to database '{}' on {}:{}",
        cli.db_name,
        cli.db_host,
        cli.db_port
    );

    Ok(db)
}

/// Insert any missing catalog permissions and make sure the
/// administrator role exists and holds all of them. Users and every
/// other role are provisioned externally.
async fn seed_reference_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    for name in PERMISSION_NAMES {
        let existing = EPermission::find()
            .filter(CPermission::PermissionName.eq(name))
            .one(db)
            .await?;

        if existing.is_none() {
            let permission = APermission {
                permission_name: Set(name.to_string()),
                ..Default::default()
            };
            permission.insert(db).await?;
        }
    }

    let admin_role = ERole::find()
        .filter(CRole::RoleName.eq(ADMIN_ROLE_NAME))
        .one(db)
        .await?;

    let admin_role = match admin_role {
        Some(role) => role,
        None => {
            let role = ARole {
                role_name: Set(ADMIN_ROLE_NAME.to_string()),
                ..Default::default()
            };
            role.insert(db).await?
        }
    };

    for permission in EPermission::find().all(db).await? {
        let granted = ERolePermission::find()
            .filter(CRolePermission::RoleId.eq(admin_role.id))
            .filter(CRolePermission::PermissionId.eq(permission.id))
            .one(db)
            .await?;

        if granted.is_none() {
            let grant = ARolePermission {
                role_id: Set(admin_role.id),
                permission_id: Set(permission.id),
                ..Default::default()
            };
            grant.insert(db).await?;
        }
    }

    Ok(())
}
