//! Userid parsing and formatting.
//!
//! Users are identified across the application by a userid of the form
//! `acct:<username>@<domain>`, where the domain is the authentication domain the account
//! belongs to. These helpers convert between that string form and its parts.

use std::fmt;

use crate::server::error::user::UserIdError;

pub use entity::user::username_to_uid;

/// Prefix every userid starts with.
pub const USERID_PREFIX: &str = "acct:";

/// A userid split into its username and domain parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId {
    pub username: String,
    pub domain: String,
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}@{}", USERID_PREFIX, self.username, self.domain)
    }
}

/// Splits a userid of the form `acct:<username>@<domain>` into its parts.
///
/// The username runs up to the first `@` and must not be empty. Everything after that
/// `@` is the domain.
///
/// # Arguments
/// - `userid` - The userid string to parse
///
/// # Returns
/// - `Ok(UserId)` - Username and domain of the userid
/// - `Err(UserIdError::MissingPrefix)` - The string does not start with `acct:`
/// - `Err(UserIdError::MissingDomain)` - There is no `@` after the username
/// - `Err(UserIdError::EmptyUsername)` - Nothing between `acct:` and `@`
///
/// # Example
/// ```ignore
/// let user = split_user("acct:fred@example.com")?;
/// assert_eq!(user.username, "fred");
/// assert_eq!(user.domain, "example.com");
/// ```
pub fn split_user(userid: &str) -> Result<UserId, UserIdError> {
    let rest = userid
        .strip_prefix(USERID_PREFIX)
        .ok_or_else(|| UserIdError::MissingPrefix(userid.to_string()))?;

    let (username, domain) = rest
        .split_once('@')
        .ok_or_else(|| UserIdError::MissingDomain(userid.to_string()))?;

    if username.is_empty() {
        return Err(UserIdError::EmptyUsername(userid.to_string()));
    }

    Ok(UserId {
        username: username.to_string(),
        domain: domain.to_string(),
    })
}

/// Builds the userid string for a username within a domain.
pub fn format_userid(username: &str, domain: &str) -> String {
    format!("{}{}@{}", USERID_PREFIX, username, domain)
}
