use sea_orm::DatabaseConnection;

use crate::{
    model::recipe::ShortRecipeDto,
    server::{
        data::{
            is_unique_violation, recipe::RecipeRepository,
            shopping_cart::ShoppingCartRepository,
        },
        error::{relation::RelationError, Error},
    },
};

/// Service for adding recipes to and removing them from the shopping cart.
pub struct ShoppingCartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingCartService<'a> {
    /// Creates a new instance of ShoppingCartService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a recipe to the user's cart.
    ///
    /// # Returns
    /// - `Ok(ShortRecipeDto)` - The added recipe
    /// - `Err(Error::NotFound)` - Recipe does not exist
    /// - `Err(Error::RelationError)` - Recipe already in the cart
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add(&self, user_id: i32, recipe_id: i32) -> Result<ShortRecipeDto, Error> {
        let Some(recipe) = RecipeRepository::new(self.db).get_by_id(recipe_id).await? else {
            return Err(Error::NotFound(format!("recipe {}", recipe_id)));
        };

        let cart_repo = ShoppingCartRepository::new(self.db);

        if cart_repo.exists(user_id, recipe_id).await? {
            return Err(RelationError::AlreadyInCart.into());
        }

        cart_repo.create(user_id, recipe_id).await.map_err(|err| {
            if is_unique_violation(&err) {
                Error::from(RelationError::AlreadyInCart)
            } else {
                Error::from(err)
            }
        })?;

        Ok(recipe.into())
    }

    /// Removes a recipe from the user's cart.
    ///
    /// # Returns
    /// - `Ok(())` - Entry removed
    /// - `Err(Error::NotFound)` - Recipe does not exist
    /// - `Err(Error::RelationError)` - Recipe was not in the cart
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove(&self, user_id: i32, recipe_id: i32) -> Result<(), Error> {
        if RecipeRepository::new(self.db).get_by_id(recipe_id).await?.is_none() {
            return Err(Error::NotFound(format!("recipe {}", recipe_id)));
        }

        let result = ShoppingCartRepository::new(self.db)
            .delete(user_id, recipe_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(RelationError::NotInCart.into());
        }

        Ok(())
    }
}
