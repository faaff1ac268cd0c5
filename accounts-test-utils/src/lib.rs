//! Shared test setup for the accounts workspace.
//!
//! Tests configure an environment with [`TestBuilder`] (tables and user fixtures) and then
//! work against the returned [`TestContext`], which owns an in-memory SQLite database and a
//! session backed by a `MemoryStore`.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_AUTH_DOMAIN, TEST_EMAIL_DOMAIN},
        fixtures::user::factory,
        test_setup_with_tables, test_setup_with_user_tables, TestBuilder, TestContext, TestError,
    };
}
