use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QuerySelect, RelationTrait,
};

use crate::server::model::db::{AuthTokenModel, UserModel};

pub struct AuthTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, key: &str) -> Result<AuthTokenModel, DbErr> {
        entity::prelude::AuthToken::insert(entity::auth_token::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Option<AuthTokenModel>, DbErr> {
        entity::prelude::AuthToken::find()
            .filter(entity::auth_token::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Resolves the user owning the provided token key
    pub async fn get_user_by_key(&self, key: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::FoodgramUser::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::foodgram_user::Relation::AuthToken.def(),
            )
            .filter(entity::auth_token::Column::Key.eq(key))
            .one(self.db)
            .await
    }

    /// Deletes the token of a user
    ///
    /// Returns OK regardless of a token existing, check [`DeleteResult::rows_affected`]
    /// to confirm the deletion.
    pub async fn delete_by_user_id(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AuthToken::delete_many()
            .filter(entity::auth_token::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
