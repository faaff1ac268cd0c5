//! `SeaORM` entities for the accounts database.

pub mod prelude;

pub mod user;
