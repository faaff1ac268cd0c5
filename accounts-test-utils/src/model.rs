//! Database model type aliases for test utilities.
//!
//! These match the aliases in the main accounts crate so fixtures and assertions
//! speak the same types.

/// Type alias for the user database model.
pub type UserModel = entity::user::Model;
