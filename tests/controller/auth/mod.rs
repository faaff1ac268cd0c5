//! Tests for authentication controller endpoints.

mod user;

use super::*;
