use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::{IngredientModel, RecipeIngredientModel};

pub struct RecipeIngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeIngredientRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Attaches `(ingredient_id, amount)` pairs to a recipe
    pub async fn create_many(
        &self,
        recipe_id: i32,
        ingredients: &[(i32, i32)],
    ) -> Result<(), DbErr> {
        if ingredients.is_empty() {
            return Ok(());
        }

        let rows = ingredients
            .iter()
            .map(|&(ingredient_id, amount)| entity::recipe_ingredient::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                ingredient_id: ActiveValue::Set(ingredient_id),
                amount: ActiveValue::Set(amount),
            });

        entity::prelude::RecipeIngredient::insert_many(rows)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete_by_recipe_id(&self, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RecipeIngredient::delete_many()
            .filter(entity::recipe_ingredient::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await
    }

    /// Retrieves ingredient rows of the provided recipes along with the ingredient
    /// they reference, ordered by recipe ID then ingredient ID
    pub async fn get_by_recipe_ids(
        &self,
        recipe_ids: &[i32],
    ) -> Result<Vec<(RecipeIngredientModel, IngredientModel)>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::RecipeIngredient::find()
            .filter(entity::recipe_ingredient::Column::RecipeId.is_in(recipe_ids.to_vec()))
            .order_by_asc(entity::recipe_ingredient::Column::RecipeId)
            .order_by_asc(entity::recipe_ingredient::Column::IngredientId)
            .find_also_related(entity::prelude::Ingredient)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(row, ingredient)| ingredient.map(|ingredient| (row, ingredient)))
            .collect())
    }
}
