use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::security::{SecurityPolicy, SessionSecurityPolicy};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Domain userids must belong to for lookups to resolve
    pub auth_domain: String,
    pub security_policy: Arc<dyn SecurityPolicy>,
}

impl AppState {
    /// Replaces the security policy used to determine the authenticated userid.
    pub fn with_security_policy(mut self, policy: impl SecurityPolicy + 'static) -> Self {
        self.security_policy = Arc::new(policy);
        self
    }
}

/// Builds state using the session-backed security policy.
impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, auth_domain): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            auth_domain,
            security_policy: Arc::new(SessionSecurityPolicy),
        }
    }
}
