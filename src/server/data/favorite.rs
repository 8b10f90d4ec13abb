use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QuerySelect,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks a recipe as favorite of a user
    ///
    /// Fails with a unique constraint violation when the pair already exists.
    pub async fn create(&self, user_id: i32, recipe_id: i32) -> Result<(), DbErr> {
        entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn exists(&self, user_id: i32, recipe_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::RecipeId.eq(recipe_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes the favorite pair
    ///
    /// Returns OK regardless of the pair existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, user_id: i32, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await
    }

    /// Returns which of the provided recipes the user has favorited
    pub async fn get_favorited_among(
        &self,
        user_id: i32,
        recipe_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Favorite::find()
            .select_only()
            .column(entity::favorite::Column::RecipeId)
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::RecipeId.is_in(recipe_ids.to_vec()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn count_by_recipe(&self, recipe_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::RecipeId.eq(recipe_id))
            .count(self.db)
            .await
    }
}
