//! User service layer.
//!
//! Resolves userids into stored users and determines the authenticated user for a request.
//! Userids take the form `acct:<username>@<domain>` and only resolve when their domain is the
//! configured authentication domain.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::db::UserModel,
    security::SecurityPolicy,
    util::user::split_user,
};

/// Service for resolving userids and the current user.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    auth_domain: &'a str,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `auth_domain` - Domain userids must belong to for lookups to resolve
    pub fn new(db: &'a DatabaseConnection, auth_domain: &'a str) -> Self {
        Self { db, auth_domain }
    }

    /// Resolves a userid into the stored user it refers to.
    ///
    /// # Arguments
    /// - `userid` - Userid in `acct:<username>@<domain>` form
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - User found for the userid's username
    /// - `Ok(None)` - Userid is malformed, belongs to another domain, or no such user exists
    /// - `Err(Error::DbErr)` - Database lookup failed
    pub async fn get_user(&self, userid: &str) -> Result<Option<UserModel>, Error> {
        let user = match split_user(userid) {
            Ok(user) => user,
            Err(e) => {
                tracing::debug!(userid = %userid, error = %e, "Unable to parse userid");

                return Ok(None);
            }
        };

        if user.domain != self.auth_domain {
            tracing::debug!(
                userid = %userid,
                auth_domain = %self.auth_domain,
                "Userid domain does not match authentication domain"
            );

            return Ok(None);
        }

        let user = UserRepository::new(self.db)
            .get_by_username(&user.username)
            .await?;

        Ok(user)
    }

    /// Determines the user authenticated for the current request.
    ///
    /// Asks the security policy for the authenticated userid and resolves it with
    /// [`UserService::get_user`]. A userid that no longer resolves to a user means the
    /// session outlived the account, so the session is invalidated and the client is
    /// redirected back to the page it requested.
    ///
    /// # Arguments
    /// - `policy` - Security policy supplying the authenticated userid
    /// - `session` - Session of the current request
    /// - `current_url` - URL of the current request, used as the redirect location
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - The authenticated user
    /// - `Ok(None)` - The request is not authenticated, the session is left untouched
    /// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - Authenticated userid has no
    ///   user, session has been invalidated
    /// - `Err(Error)` - Security policy, session or database failure
    pub async fn authenticated_user(
        &self,
        policy: &dyn SecurityPolicy,
        session: &Session,
        current_url: &str,
    ) -> Result<Option<UserModel>, Error> {
        let Some(userid) = policy.authenticated_userid(session).await? else {
            return Ok(None);
        };

        let Some(user) = self.get_user(&userid).await? else {
            session.flush().await?;

            tracing::debug!(
                userid = %userid,
                "Session invalidated for authenticated userid that was not found in database"
            );

            return Err(AuthError::UserNotInDatabase {
                userid,
                location: current_url.to_string(),
            }
            .into());
        };

        Ok(Some(user))
    }
}
