use sea_orm::DatabaseConnection;

use crate::{
    model::recipe::ShortRecipeDto,
    server::{
        data::{favorite::FavoriteRepository, is_unique_violation, recipe::RecipeRepository},
        error::{relation::RelationError, Error},
    },
};

/// Service for marking recipes as favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a recipe to the user's favorites.
    ///
    /// # Returns
    /// - `Ok(ShortRecipeDto)` - The favorited recipe
    /// - `Err(Error::NotFound)` - Recipe does not exist
    /// - `Err(Error::RelationError)` - Recipe already favorited, including a concurrent
    ///   request that stored it first
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add(&self, user_id: i32, recipe_id: i32) -> Result<ShortRecipeDto, Error> {
        let Some(recipe) = RecipeRepository::new(self.db).get_by_id(recipe_id).await? else {
            return Err(Error::NotFound(format!("recipe {}", recipe_id)));
        };

        let favorite_repo = FavoriteRepository::new(self.db);

        if favorite_repo.exists(user_id, recipe_id).await? {
            return Err(RelationError::AlreadyFavorited.into());
        }

        favorite_repo
            .create(user_id, recipe_id)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    Error::from(RelationError::AlreadyFavorited)
                } else {
                    Error::from(err)
                }
            })?;

        Ok(recipe.into())
    }

    /// Removes a recipe from the user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite removed
    /// - `Err(Error::NotFound)` - Recipe does not exist
    /// - `Err(Error::RelationError)` - Recipe was not a favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove(&self, user_id: i32, recipe_id: i32) -> Result<(), Error> {
        if RecipeRepository::new(self.db).get_by_id(recipe_id).await?.is_none() {
            return Err(Error::NotFound(format!("recipe {}", recipe_id)));
        }

        let result = FavoriteRepository::new(self.db)
            .delete(user_id, recipe_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(RelationError::NotFavorited.into());
        }

        Ok(())
    }
}
