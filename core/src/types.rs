/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::{Parser, Subcommand};
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use super::input::port_in_range;
use super::store::Resource;

#[derive(Parser, Debug)]
#[command(name = "Carplant", display_name = "Carplant", bin_name = "carplant-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "CARPLANT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "CARPLANT_DB_HOST", default_value = "localhost")]
    pub db_host: String,
    #[arg(long, env = "CARPLANT_DB_NAME", default_value = "car_production")]
    pub db_name: String,
    #[arg(long, env = "CARPLANT_DB_USER", default_value = "postgres")]
    pub db_user: String,
    #[arg(long, env = "CARPLANT_DB_PASSWORD")]
    pub db_password: Option<String>,
    #[arg(long, env = "CARPLANT_DB_PASSWORD_FILE")]
    pub db_password_file: Option<String>,
    #[arg(long, env = "CARPLANT_DB_PORT", value_parser = port_in_range, default_value_t = 5432)]
    pub db_port: u16,
    #[arg(long, env = "CARPLANT_LOGIN")]
    pub login: String,
    #[arg(long, env = "CARPLANT_PASSWORD")]
    pub password: Option<String>,
    #[arg(long, env = "CARPLANT_PASSWORD_FILE")]
    pub password_file: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the sections the current role may open
    Menu,
    /// List all rows of a resource
    List { resource: Resource },
    /// Insert a row; values follow the resource's column order
    Add {
        resource: Resource,
        values: Vec<String>,
    },
    /// Overwrite all columns of the row with the given id
    Edit {
        resource: Resource,
        id: i64,
        values: Vec<String>,
    },
    /// Delete the row with the given id
    Delete { resource: Resource, id: i64 },
}

#[derive(Debug)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

/// The result of a successful login. Held by the caller and passed to
/// every gated operation; a new role is only picked up by a fresh login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i32,
    pub login: String,
    pub role: String,
}

pub type EPermission = permission::Entity;
pub type ERole = role::Entity;
pub type ERolePermission = role_permission::Entity;
pub type EUser = user::Entity;

pub type MPermission = permission::Model;
pub type MRole = role::Model;
pub type MRolePermission = role_permission::Model;
pub type MUser = user::Model;

pub type APermission = permission::ActiveModel;
pub type ARole = role::ActiveModel;
pub type ARolePermission = role_permission::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CPermission = permission::Column;
pub type CRole = role::Column;
pub type CRolePermission = role_permission::Column;
pub type CUser = user::Column;
