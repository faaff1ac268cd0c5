//! Tests for user lookup endpoints.

mod get_user;

use super::*;
