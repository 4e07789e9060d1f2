use crate::commands::{Commands, HistoryCommands, ProfileCommands};
use crate::error::{CliError, CliResult};

use mm_client::{HistoryState, MoodMuse, PageError, SessionState};

use std::io::BufRead;

use log::debug;
use serde_json::{Value, json};

/// Run one command against the application root
pub async fn execute(app: &MoodMuse, command: Commands) -> CliResult<Value> {
    match command {
        Commands::Login { username, password } => {
            let password = password_or_stdin(password)?;
            let state = app.login_page().submit(&username, &password).await;
            fail_on(state.error)?;
            Ok(session_json(&app.session().state()))
        }

        Commands::Register {
            username,
            email,
            password,
        } => {
            let password = password_or_stdin(password)?;
            let state = app
                .register_page()
                .submit(&username, &email, &password)
                .await;
            fail_on(state.error)?;
            Ok(json!({ "message": state.success }))
        }

        Commands::Logout => {
            app.session().logout()?;
            Ok(json!({ "logged_out": true }))
        }

        Commands::Whoami => {
            let state = app.init().await?;
            Ok(session_json(&state))
        }

        Commands::Analyze { text, emoji } => {
            let state = app.dashboard_page().analyze(&text, emoji.as_deref()).await;
            fail_on(state.analysis_error)?;
            Ok(serde_json::to_value(state.analysis)?)
        }

        Commands::Ask { question } => {
            let state = app.dashboard_page().ask(&question).await;
            fail_on(state.ask_error)?;
            Ok(json!({ "answer": state.answer }))
        }

        Commands::History { action } => match action {
            HistoryCommands::List { page } => {
                let state = app.history_page().load(page).await;
                fail_on(state.error.clone())?;
                history_json(&state)
            }
            HistoryCommands::Delete { id, page } => {
                let history = app.history_page();
                let loaded = history.load(page).await;
                fail_on(loaded.error)?;
                if !loaded.entries.iter().any(|entry| entry.id == id) {
                    return Err(CliError::input(format!("Entry {id} is not on page {page}")));
                }
                let state = history.delete(id).await;
                fail_on(state.error.clone())?;
                history_json(&state)
            }
        },

        Commands::Profile { action } => {
            app.init().await?;
            if !app.session().state().is_authenticated {
                return Err(CliError::input(
                    "Not signed in. Run `muse login <username>` first.",
                ));
            }
            let profile = app.profile_page();
            let current = profile.mount();

            let state = match action {
                ProfileCommands::Update { username, bio } => {
                    if username.is_none() && bio.is_none() {
                        return Err(CliError::input(
                            "Nothing to update: pass --username and/or --bio",
                        ));
                    }
                    let username = username.unwrap_or(current.display_name);
                    let bio = bio.unwrap_or(current.bio);
                    profile.save(&username, &bio).await
                }
                ProfileCommands::UploadImage { path } => profile.upload_image(&path).await,
            };
            fail_on(state.error.clone())?;
            Ok(serde_json::to_value(&state)?)
        }
    }
}

fn fail_on(error: Option<PageError>) -> CliResult<()> {
    match error {
        Some(error) => Err(CliError::from(error)),
        None => Ok(()),
    }
}

fn session_json(state: &SessionState) -> Value {
    json!({
        "is_authenticated": state.is_authenticated,
        "user": state.user,
    })
}

fn history_json(state: &HistoryState) -> CliResult<Value> {
    Ok(json!({
        "page": state.current_page,
        "total_pages": state.total_pages,
        "total_entries": state.total_entries,
        "entries": serde_json::to_value(&state.entries)?,
    }))
}

fn password_or_stdin(password: Option<String>) -> CliResult<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    debug!("Reading password from stdin");
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| CliError::input(format!("Failed to read password: {e}")))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
