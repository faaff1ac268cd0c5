//! Test fixture modules for database record creation.
//!
//! - `user` - user records and in-memory user models

pub mod user;
