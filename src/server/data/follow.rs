use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::server::model::db::UserModel;

pub struct FollowRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FollowRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Subscribes `user_id` to `author_id`
    ///
    /// Fails with a unique constraint violation when the subscription already exists.
    pub async fn create(&self, user_id: i32, author_id: i32) -> Result<(), DbErr> {
        entity::prelude::Follow::insert(entity::follow::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            author_id: ActiveValue::Set(author_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn exists(&self, user_id: i32, author_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Follow::find()
            .filter(entity::follow::Column::UserId.eq(user_id))
            .filter(entity::follow::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns OK regardless of the subscription existing, check
    /// [`DeleteResult::rows_affected`].
    pub async fn delete(&self, user_id: i32, author_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Follow::delete_many()
            .filter(entity::follow::Column::UserId.eq(user_id))
            .filter(entity::follow::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await
    }

    /// Returns which of the provided authors the user is subscribed to
    pub async fn get_followed_among(
        &self,
        user_id: i32,
        author_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Follow::find()
            .select_only()
            .column(entity::follow::Column::AuthorId)
            .filter(entity::follow::Column::UserId.eq(user_id))
            .filter(entity::follow::Column::AuthorId.is_in(author_ids.to_vec()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Retrieves a window of the authors the user is subscribed to, ordered by ID,
    /// along with the total number of subscriptions
    pub async fn get_authors_page(
        &self,
        user_id: i32,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<UserModel>, u64), DbErr> {
        let followed = entity::prelude::Follow::find()
            .select_only()
            .column(entity::follow::Column::AuthorId)
            .filter(entity::follow::Column::UserId.eq(user_id))
            .into_query();

        let query = entity::prelude::FoodgramUser::find()
            .filter(entity::foodgram_user::Column::Id.in_subquery(followed));

        let count = query.clone().count(self.db).await?;
        let authors = query
            .order_by_asc(entity::foodgram_user::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok((authors, count))
    }
}
