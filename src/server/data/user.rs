use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::UserModel;

/// Fields of a new account, the password is already hashed
pub struct NewUser<'b> {
    pub email: &'b str,
    pub username: &'b str,
    pub first_name: &'b str,
    pub last_name: &'b str,
    pub password_hash: &'b str,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user: NewUser<'_>) -> Result<UserModel, DbErr> {
        let user = entity::foodgram_user::ActiveModel {
            email: ActiveValue::Set(user.email.to_string()),
            username: ActiveValue::Set(user.username.to_string()),
            first_name: ActiveValue::Set(user.first_name.to_string()),
            last_name: ActiveValue::Set(user.last_name.to_string()),
            password_hash: ActiveValue::Set(user.password_hash.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::FoodgramUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::FoodgramUser::find()
            .filter(entity::foodgram_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::FoodgramUser::find()
            .filter(entity::foodgram_user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::FoodgramUser::find()
            .filter(entity::foodgram_user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Retrieves users by ID, missing IDs are skipped
    pub async fn get_many_by_ids(&self, user_ids: &[i32]) -> Result<Vec<UserModel>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::FoodgramUser::find()
            .filter(entity::foodgram_user::Column::Id.is_in(user_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Retrieves a window of users ordered by ID along with the total user count
    pub async fn get_page(&self, offset: u64, limit: u64) -> Result<(Vec<UserModel>, u64), DbErr> {
        let count = entity::prelude::FoodgramUser::find().count(self.db).await?;

        let users = entity::prelude::FoodgramUser::find()
            .order_by_asc(entity::foodgram_user::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok((users, count))
    }

    /// Replaces the stored password hash
    ///
    /// Returns `Ok(false)` when the user does not exist.
    pub async fn update_password_hash(
        &self,
        user_id: i32,
        password_hash: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::FoodgramUser::update_many()
            .col_expr(
                entity::foodgram_user::Column::PasswordHash,
                migration::Expr::value(password_hash.to_string()),
            )
            .filter(entity::foodgram_user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
