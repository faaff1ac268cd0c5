//! HTTP controller endpoints for the accounts web API.
//!
//! This module contains Axum handlers for authentication and user lookups. Controllers
//! handle HTTP requests, interact with services, and return HTTP responses. They integrate
//! with tower-sessions for session management and use utoipa for OpenAPI documentation.

pub mod auth;
pub mod user;
pub mod util;
