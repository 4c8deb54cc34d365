use crate::api::types::User;
use crate::api::{ApiClient, ApiError};
use crate::db::Database;
use crate::error::Error;
use crate::profile::ProfileStore;
use crate::session::SuggestionSessions;
use tauri::State;
use tracing::{debug, warn};

pub const SESSION_TOKEN_KEY: &str = "session_token";

/// `Ok(None)` means nobody is signed in; everything else gates on this.
pub async fn run_current_user(api: &ApiClient) -> Result<Option<User>, Error> {
    match api.me().await {
        Ok(user) => Ok(Some(user)),
        Err(ApiError::Unauthorized) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[tauri::command]
pub async fn current_user(api: State<'_, ApiClient>) -> Result<Option<User>, Error> {
    run_current_user(&api).await
}

/// Exchange the session id from the OAuth redirect fragment for a signed-in
/// user. The returned token is cached locally so a restart stays signed in.
#[tauri::command]
pub async fn establish_session(
    api: State<'_, ApiClient>,
    db: State<'_, Database>,
    session_id: String,
) -> Result<User, Error> {
    let session_id = session_id.trim();
    if session_id.is_empty() {
        return Err(Error::validation("Missing session id"));
    }

    let session = api.create_session(session_id).await?;
    if let Err(e) = db.set_setting(SESSION_TOKEN_KEY, &session.session_token) {
        warn!("failed to persist session token: {e}");
    }
    api.set_token(Some(session.session_token));
    debug!("session established for {}", session.user.email);
    Ok(session.user)
}

#[tauri::command]
pub async fn logout(
    api: State<'_, ApiClient>,
    db: State<'_, Database>,
    profiles: State<'_, ProfileStore>,
    sessions: State<'_, SuggestionSessions>,
) -> Result<(), Error> {
    if let Err(e) = api.logout().await {
        warn!("backend logout failed: {e}");
    }

    // Session-scoped state dies with the session whether or not the backend
    // heard about it.
    api.set_token(None);
    if let Err(e) = db.delete_setting(SESSION_TOKEN_KEY) {
        warn!("failed to drop cached session token: {e}");
    }
    profiles.set(None);
    sessions.clear();
    Ok(())
}
