use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct ShoppingCartRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShoppingCartRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a recipe to a user's cart
    ///
    /// Fails with a unique constraint violation when the recipe is already in the cart.
    pub async fn create(&self, user_id: i32, recipe_id: i32) -> Result<(), DbErr> {
        entity::prelude::ShoppingCart::insert(entity::shopping_cart::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn exists(&self, user_id: i32, recipe_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ShoppingCart::find()
            .filter(entity::shopping_cart::Column::UserId.eq(user_id))
            .filter(entity::shopping_cart::Column::RecipeId.eq(recipe_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Removes a recipe from a user's cart
    ///
    /// Returns OK regardless of the entry existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, user_id: i32, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ShoppingCart::delete_many()
            .filter(entity::shopping_cart::Column::UserId.eq(user_id))
            .filter(entity::shopping_cart::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await
    }

    /// Returns which of the provided recipes are in the user's cart
    pub async fn get_in_cart_among(
        &self,
        user_id: i32,
        recipe_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ShoppingCart::find()
            .select_only()
            .column(entity::shopping_cart::Column::RecipeId)
            .filter(entity::shopping_cart::Column::UserId.eq(user_id))
            .filter(entity::shopping_cart::Column::RecipeId.is_in(recipe_ids.to_vec()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Returns the IDs of every recipe in the user's cart in the order they were added
    pub async fn get_recipe_ids_by_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::ShoppingCart::find()
            .select_only()
            .column(entity::shopping_cart::Column::RecipeId)
            .filter(entity::shopping_cart::Column::UserId.eq(user_id))
            .order_by_asc(entity::shopping_cart::Column::CreatedAt)
            .order_by_asc(entity::shopping_cart::Column::RecipeId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
