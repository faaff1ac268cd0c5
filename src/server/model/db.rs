//! Database model type aliases.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `username` - Username as registered
/// - `uid` - Normalized username used for lookups
/// - `email` - Email address of the account
/// - `created_at` - Timestamp when the user account was created
pub type UserModel = entity::user::Model;
