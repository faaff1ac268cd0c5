//! Utility types for controller request handling.
//!
//! This module provides request extractors shared across controllers, such as resolving
//! the current user for a request.

pub mod current_user;
