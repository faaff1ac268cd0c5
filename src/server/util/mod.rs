//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers shared by services and controllers, currently
//! parsing and formatting of `acct:` userids.

pub mod user;
