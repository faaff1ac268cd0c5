//! Session data models and utilities.
//!
//! This module provides type-safe wrappers for session data storage and retrieval using
//! tower-sessions. Each submodule defines a specific piece of session state with methods for
//! inserting, retrieving, and removing it from the session store (Valkey-backed in production).

pub mod user;
