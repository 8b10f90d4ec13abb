use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_EMAIL_DOMAIN, UNUSABLE_PASSWORD_HASH},
    error::TestError,
    model::{AuthTokenModel, FollowModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user that cannot log in, email is `{username}@example.com`
    pub async fn insert_user(&self, username: &str) -> Result<UserModel, TestError> {
        self.insert_user_with_password_hash(username, UNUSABLE_PASSWORD_HASH)
            .await
    }

    /// Insert a user with a precomputed password hash
    pub async fn insert_user_with_password_hash(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::FoodgramUser::insert(entity::foodgram_user::ActiveModel {
                email: ActiveValue::Set(format!("{}@{}", username, TEST_EMAIL_DOMAIN)),
                username: ActiveValue::Set(username.to_string()),
                first_name: ActiveValue::Set("Test".to_string()),
                last_name: ActiveValue::Set(username.to_string()),
                password_hash: ActiveValue::Set(password_hash.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_token(
        &self,
        user_id: i32,
        key: &str,
    ) -> Result<AuthTokenModel, TestError> {
        Ok(
            entity::prelude::AuthToken::insert(entity::auth_token::ActiveModel {
                key: ActiveValue::Set(key.to_string()),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Subscribe `user_id` to `author_id`
    pub async fn insert_follow(
        &self,
        user_id: i32,
        author_id: i32,
    ) -> Result<FollowModel, TestError> {
        Ok(
            entity::prelude::Follow::insert(entity::follow::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                author_id: ActiveValue::Set(author_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
