use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::{auth::AuthError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Look up a user by userid
///
/// # Responses
/// - 200 (Success): The user the userid refers to
/// - 404 (Not Found): The userid is malformed, belongs to another domain, or has no user
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/users/{userid}",
    tag = USER_TAG,
    params(
        ("userid" = String, Path, description = "Userid in acct:<username>@<domain> form")
    ),
    responses(
        (status = 200, description = "Success when retrieving user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(userid): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db, &state.auth_domain);

    let Some(user) = user_service.get_user(&userid).await? else {
        return Err(AuthError::UserNotFound(userid).into());
    };

    Ok((
        StatusCode::OK,
        Json(UserDto::from_model(user, &state.auth_domain)),
    ))
}
