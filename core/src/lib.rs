/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod consts;
pub mod database;
pub mod error;
pub mod input;
pub mod permission;
pub mod store;
pub mod types;

use anyhow::Result;
use clap::Parser;
use database::connect_db;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use types::*;

pub async fn init_state() -> Result<Arc<AppState>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .init();

    let db = connect_db(&cli).await?;

    Ok(Arc::new(AppState { db, cli }))
}
