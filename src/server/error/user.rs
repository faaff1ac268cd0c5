use thiserror::Error;

/// Reasons a string fails to parse as an `acct:<username>@<domain>` userid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Userid {0:?} does not start with \"acct:\"")]
    MissingPrefix(String),
    #[error("Userid {0:?} has no \"@\" separating username and domain")]
    MissingDomain(String),
    #[error("Userid {0:?} has an empty username")]
    EmptyUsername(String),
}
