//! Session commands

use serde::Serialize;
use shiftcal_domain::{AuthState, Result};

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

/// Who is signed in and how much data is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub signed_in: bool,
    pub user_id: Option<String>,
    pub loading: bool,
    pub shift_type_count: usize,
    pub shift_count: usize,
}

/// Current session summary
pub async fn get_session(ctx: &AppContext) -> Result<SessionInfo> {
    execute_command("session::get_session", || async move {
        let state = ctx.schedule.snapshot();
        Ok(SessionInfo {
            signed_in: matches!(state.session, AuthState::SignedIn(_)),
            user_id: state.user().map(|u| u.as_str().to_string()),
            loading: state.loading,
            shift_type_count: state.shift_types.len(),
            shift_count: state.schedule.len(),
        })
    })
    .await
}

/// Re-read the signed-in user's document from the store
pub async fn reload_session(ctx: &AppContext) -> Result<SessionInfo> {
    execute_command("session::reload_session", || async move {
        ctx.schedule.load_session().await?;
        Ok(())
    })
    .await?;
    get_session(ctx).await
}

/// End the session and clear in-memory data
pub async fn sign_out(ctx: &AppContext) -> Result<SessionInfo> {
    execute_command("session::sign_out", || async move {
        ctx.schedule.sign_out().await?;
        Ok(())
    })
    .await?;
    get_session(ctx).await
}
