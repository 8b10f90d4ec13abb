use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        recipe_ingredient::RecipeIngredientRepository, shopping_cart::ShoppingCartRepository,
    },
    error::Error,
    util::{
        pdf::ShoppingListRenderer,
        shopping_list::{aggregate, ShoppingListItem},
    },
};

/// Service producing the aggregated shopping list of a user's cart.
pub struct ShoppingListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingListService<'a> {
    /// Creates a new instance of ShoppingListService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sums the ingredients of every recipe in the user's cart.
    ///
    /// Each `(name, measurement_unit)` pair appears once. Items keep the order in which they
    /// are first met while walking cart entries in the order they were added and each
    /// recipe's ingredients by ingredient ID.
    ///
    /// # Returns
    /// - `Ok(Vec<ShoppingListItem>)` - Aggregated items, empty when the cart is empty
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_items(&self, user_id: i32) -> Result<Vec<ShoppingListItem>, Error> {
        let recipe_ids = ShoppingCartRepository::new(self.db)
            .get_recipe_ids_by_user(user_id)
            .await?;

        let mut lines_by_recipe: HashMap<i32, Vec<(String, String, i32)>> = HashMap::new();
        for (row, ingredient) in RecipeIngredientRepository::new(self.db)
            .get_by_recipe_ids(&recipe_ids)
            .await?
        {
            lines_by_recipe.entry(row.recipe_id).or_default().push((
                ingredient.name,
                ingredient.measurement_unit,
                row.amount,
            ));
        }

        let lines = recipe_ids
            .iter()
            .filter_map(|recipe_id| lines_by_recipe.remove(recipe_id))
            .flatten();

        Ok(aggregate(lines))
    }

    /// Renders the user's aggregated shopping list as PDF bytes.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - PDF document, holding only an empty-list message for an empty cart
    /// - `Err(Error::RenderError)` - Font loading or document serialization failed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn export_pdf(
        &self,
        user_id: i32,
        renderer: &ShoppingListRenderer,
    ) -> Result<Vec<u8>, Error> {
        let items = self.get_items(user_id).await?;

        tracing::debug!(user_id = %user_id, items = items.len(), "Rendering shopping list");

        renderer.render(&items)
    }
}
