use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::server::util::user::format_userid;

/// A user account as exposed over the API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    /// Userid in `acct:<username>@<domain>` form
    pub userid: String,
    pub username: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

/// The currently authenticated user, `None` for anonymous requests
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CurrentUserDto {
    pub user: Option<UserDto>,
}

impl UserDto {
    /// Builds the API representation of a stored user within `auth_domain`.
    pub fn from_model(user: entity::user::Model, auth_domain: &str) -> Self {
        Self {
            id: user.id,
            userid: format_userid(&user.username, auth_domain),
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
