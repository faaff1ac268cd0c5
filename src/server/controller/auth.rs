use axum::{
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::CurrentUserDto},
    server::{
        controller::util::current_user::CurrentUser, error::Error,
        security::SessionSecurityPolicy,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Get the currently authenticated user
///
/// # Responses
/// - 200 (Success): The current user, `null` when the request is anonymous
/// - 302 (Found): The session belonged to a user that no longer exists; the session was
///   invalidated and the client is sent back to the page it requested
/// - 500 (Internal Server Error): Session store or database error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Success when retrieving the current user", body = CurrentUserDto),
        (status = 302, description = "Session invalidated for a user that no longer exists"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(CurrentUser(user): CurrentUser) -> Json<CurrentUserDto> {
    Json(CurrentUserDto { user })
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Successfully logged out, redirect to the index
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to index"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    if let Some(userid) = SessionSecurityPolicy.forget(&session).await? {
        tracing::debug!(userid = %userid, "Logged out");
    }

    Ok(Redirect::temporary("/"))
}
