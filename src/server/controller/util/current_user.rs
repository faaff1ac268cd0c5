use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::request::Parts,
};
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

/// The user authenticated for the request, `None` for anonymous requests.
///
/// Extraction asks the application's security policy for the authenticated userid and
/// resolves it to a user. If the userid no longer resolves to a user, the session is
/// invalidated and extraction rejects with a `302 Found` redirect back to the requested URL.
pub struct CurrentUser(pub Option<UserDto>);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, reason)| AuthError::SessionUnavailable(reason.to_string()))?;

        let location = current_url(parts);

        let user = UserService::new(&state.db, &state.auth_domain)
            .authenticated_user(state.security_policy.as_ref(), &session, &location)
            .await?
            .map(|user| UserDto::from_model(user, &state.auth_domain));

        Ok(CurrentUser(user))
    }
}

/// Path and query the client requested, before any router nesting stripped a prefix
fn current_url(parts: &Parts) -> String {
    let uri = parts
        .extensions
        .get::<OriginalUri>()
        .map(|OriginalUri(uri)| uri)
        .unwrap_or(&parts.uri);

    uri.path_and_query()
        .map(|path_and_query| path_and_query.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}
