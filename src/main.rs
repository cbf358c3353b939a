/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{bail, Result};
use carplant_core::input::load_secret;
use carplant_core::store::Resource;
use carplant_core::types::{AppState, Command, Session};
use carplant_core::{auth, init_state, permission, store};
use std::sync::Arc;

#[tokio::main]
pub async fn main() -> Result<()> {
    let state = init_state().await?;
    let session = authenticate(&state).await?;

    run_command(&state, &session).await
}

async fn authenticate(state: &Arc<AppState>) -> Result<Session> {
    let password = if let Some(password) = &state.cli.password {
        password.clone()
    } else if let Some(file) = &state.cli.password_file {
        load_secret(file)?
    } else {
        bail!("No password provided; use --password or --password-file")
    };

    let session = auth::login(&state.db, &state.cli.login, &password).await?;
    tracing::info!("Logged in as '{}' with role '{}'", session.login, session.role);

    Ok(session)
}

async fn run_command(state: &Arc<AppState>, session: &Session) -> Result<()> {
    match &state.cli.command {
        Command::Menu => {
            for resource in Resource::ALL {
                if permission::has_permission(&state.db, &session.role, resource.menu_permission())
                    .await
                {
                    println!("{}", resource.table());
                }
            }
        }
        Command::List { resource } => {
            let rows = store::list(&state.db, session, *resource).await?;
            println!("{}", resource.header().join(" | "));
            for row in rows {
                let rendered: Vec<String> = row
                    .into_iter()
                    .map(|value| value.unwrap_or_default())
                    .collect();
                println!("{}", rendered.join(" | "));
            }
        }
        Command::Add { resource, values } => {
            store::insert(&state.db, session, *resource, values).await?;
            println!("1 row inserted into {}", resource.table());
        }
        Command::Edit {
            resource,
            id,
            values,
        } => {
            let affected = store::update(&state.db, session, *resource, values, *id).await?;
            println!("{} row(s) updated in {}", affected, resource.table());
        }
        Command::Delete { resource, id } => {
            let affected = store::delete(&state.db, session, *resource, *id).await?;
            println!("{} row(s) deleted from {}", affected, resource.table());
        }
    }

    Ok(())
}
