//! User fixture utilities.
//!
//! This module provides methods for inserting user records during a test and factory
//! functions for creating in-memory model instances.

pub mod factory;

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_EMAIL_DOMAIN, error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with a generated email address.
    pub async fn insert_user(&self, username: &str) -> Result<UserModel, TestError> {
        let email = format!("{}@{}", username, TEST_EMAIL_DOMAIN);

        self.insert_user_with_email(username, &email).await
    }

    /// Insert a user with the provided email address.
    pub async fn insert_user_with_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                uid: ActiveValue::Set(entity::user::username_to_uid(username)),
                email: ActiveValue::Set(email.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
