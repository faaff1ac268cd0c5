//! Service layer for business logic.
//!
//! Services coordinate between repositories, the session and the security policy to
//! implement operations used by the HTTP controllers.

pub mod user;
