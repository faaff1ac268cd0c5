//! Wire types shared by the HTTP API and its consumers.

pub mod api;
pub mod user;
