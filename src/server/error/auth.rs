use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// The security policy reports an authenticated userid whose user no longer exists.
    ///
    /// The session has already been invalidated by the time this is returned; the response
    /// redirects the client back to `location`, the URL it originally requested.
    #[error("Userid {userid:?} not found in database despite having an active session")]
    UserNotInDatabase { userid: String, location: String },
    /// A userid lookup resolved to no user for this authentication domain.
    #[error("No user found for userid {0:?}")]
    UserNotFound(String),
    #[error("Session layer is not available for this request: {0}")]
    SessionUnavailable(String),
}

impl AuthError {
    fn user_not_found() -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInDatabase {
                ref userid,
                ref location,
            } => {
                tracing::debug!(
                    userid = %userid,
                    location = %location,
                    "{}",
                    self
                );

                match header::HeaderValue::from_str(location) {
                    Ok(location) => {
                        (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
                    }
                    Err(err) => InternalServerError(err).into_response(),
                }
            }
            Self::UserNotFound(ref userid) => {
                tracing::debug!(userid = %userid, "{}", self);

                Self::user_not_found()
            }
            Self::SessionUnavailable(_) => InternalServerError(self).into_response(),
        }
    }
}
