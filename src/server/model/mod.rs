//! Server application models and type definitions.
//!
//! This module contains application state, database model type aliases and session data
//! structures. These models bridge the gap between database entities, the security policy
//! and HTTP handlers.

pub mod app;
pub mod db;
pub mod session;
