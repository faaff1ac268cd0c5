//! Server application core modules.
//!
//! This module contains all server-side functionality: HTTP routing, the security policy
//! abstraction, userid resolution, session handling and database access.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod security;
pub mod service;
pub mod startup;
pub mod util;
