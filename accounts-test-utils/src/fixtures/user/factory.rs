//! Factory functions for generating mock user database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests.

use chrono::Utc;

use crate::{constant::TEST_EMAIL_DOMAIN, model::UserModel};

/// Create a mock user database model for testing.
///
/// # Arguments
/// - `id` - The user record ID
/// - `username` - The username, also used to derive `uid` and `email`
pub fn mock_user_model(id: i32, username: &str) -> UserModel {
    UserModel {
        id,
        username: username.to_string(),
        uid: entity::user::username_to_uid(username),
        email: format!("{}@{}", username, TEST_EMAIL_DOMAIN),
        created_at: Utc::now().naive_utc(),
    }
}
