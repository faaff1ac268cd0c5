use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "accounts:user:userid";

/// Authenticated userid as stored in the session
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Insert userid into session
    pub async fn insert(session: &Session, userid: &str) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(userid.to_string()))
            .await?;

        Ok(())
    }

    /// Get userid from session
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        let userid = session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(userid)| userid);

        Ok(userid)
    }
}
