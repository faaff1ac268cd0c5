//! Security policies.
//!
//! A security policy answers a single question for a request: which userid, if any, is
//! authenticated. Everything that needs the current user goes through the policy held in
//! [`AppState`](crate::server::model::app::AppState), so the source of identity can be
//! swapped without touching lookups or handlers.

use async_trait::async_trait;
use tower_sessions::Session;

use crate::server::{error::Error, model::session::user::SessionUserId};

/// Supplies the authenticated userid for a request.
#[async_trait]
pub trait SecurityPolicy: Send + Sync {
    /// Returns the userid authenticated for the request owning `session`, or `None` for
    /// anonymous requests.
    async fn authenticated_userid(&self, session: &Session) -> Result<Option<String>, Error>;
}

/// Security policy backed by the userid stored in the request's session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionSecurityPolicy;

impl SessionSecurityPolicy {
    /// Marks `userid` as authenticated for subsequent requests using this session.
    pub async fn remember(&self, session: &Session, userid: &str) -> Result<(), Error> {
        SessionUserId::insert(session, userid).await
    }

    /// Logs the session out.
    ///
    /// The session is only flushed when a userid was actually stored in it.
    ///
    /// # Returns
    /// - `Ok(Some(userid))` - The userid that was forgotten
    /// - `Ok(None)` - Nothing was authenticated for this session
    /// - `Err(Error::SessionError)` - The session store failed
    pub async fn forget(&self, session: &Session) -> Result<Option<String>, Error> {
        let maybe_userid = SessionUserId::get(session).await?;

        if maybe_userid.is_some() {
            session.flush().await?;
        }

        Ok(maybe_userid)
    }
}

#[async_trait]
impl SecurityPolicy for SessionSecurityPolicy {
    async fn authenticated_userid(&self, session: &Session) -> Result<Option<String>, Error> {
        SessionUserId::get(session).await
    }
}

/// Security policy that reports the same userid for every request.
///
/// Useful in tests and for single-identity deployments sitting behind an authenticating proxy.
#[derive(Debug, Clone, Default)]
pub struct StaticSecurityPolicy {
    userid: Option<String>,
}

impl StaticSecurityPolicy {
    /// Policy authenticating every request as `userid`.
    pub fn new(userid: impl Into<String>) -> Self {
        Self {
            userid: Some(userid.into()),
        }
    }

    /// Policy treating every request as anonymous.
    pub fn anonymous() -> Self {
        Self { userid: None }
    }
}

#[async_trait]
impl SecurityPolicy for StaticSecurityPolicy {
    async fn authenticated_userid(&self, _session: &Session) -> Result<Option<String>, Error> {
        Ok(self.userid.clone())
    }
}
