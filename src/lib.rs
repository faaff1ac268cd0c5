//! Account lookup and authenticated user resolution.
//!
//! Users are identified by userids of the form `acct:<username>@<domain>`. The
//! [`server::service::user::UserService`] resolves such userids into stored users for the
//! configured authentication domain and determines the user authenticated for a request,
//! invalidating sessions whose user no longer exists.

pub mod model;
pub mod server;
