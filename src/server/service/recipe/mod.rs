//! Recipe publishing and the recipe feed.

pub mod validation;

use std::collections::{HashMap, HashSet};

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        recipe::{CreateRecipeDto, RecipeDto, RecipeIngredientDto, UpdateRecipeDto},
        tag::TagDto,
    },
    server::{
        data::{
            favorite::FavoriteRepository,
            ingredient::IngredientRepository,
            recipe::{NewRecipe, RecipeChanges, RecipeFilter, RecipeRepository},
            recipe_ingredient::RecipeIngredientRepository,
            recipe_tag::RecipeTagRepository,
            shopping_cart::ShoppingCartRepository,
            tag::TagRepository,
            user::UserRepository,
        },
        error::{auth::AuthError, validation::ValidationError, Error},
        model::db::{user_dto, RecipeModel},
        service::user::followed_among,
        util::query::PageRequest,
    },
};

use self::validation::{
    validate_cooking_time, validate_ingredients, validate_not_blank, validate_tags,
};

/// Service for creating, editing, deleting and listing recipes.
///
/// Multi-row writes (the recipe along with its ingredient and tag rows) run inside a single
/// transaction so a failed request leaves no partial recipe behind.
pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    /// Creates a new instance of RecipeService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a page of the recipe feed as seen by `viewer_id`, newest first.
    ///
    /// Favorite and cart filters only apply to authenticated viewers; the controller drops
    /// them for anonymous requests.
    pub async fn get_recipes(
        &self,
        viewer_id: Option<i32>,
        filter: &RecipeFilter,
        page: PageRequest,
    ) -> Result<(Vec<RecipeDto>, u64), Error> {
        let (recipes, count) = RecipeRepository::new(self.db)
            .get_page(filter, page.offset(), page.limit)
            .await?;

        Ok((self.to_dtos(viewer_id, recipes).await?, count))
    }

    /// Retrieves a single recipe
    ///
    /// # Returns
    /// - `Ok(RecipeDto)` - Recipe found
    /// - `Err(Error::NotFound)` - No recipe with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_recipe(
        &self,
        viewer_id: Option<i32>,
        recipe_id: i32,
    ) -> Result<RecipeDto, Error> {
        let recipe = self.find(recipe_id).await?;

        self.to_dto(viewer_id, recipe).await
    }

    /// Publishes a new recipe by `author_id`.
    ///
    /// # Returns
    /// - `Ok(RecipeDto)` - Recipe created along with its ingredients and tags
    /// - `Err(Error::ValidationError)` - Blank name or text, cooking time below 1, no or
    ///   repeated ingredients or tags, amounts below 1, or unknown ingredient or tag IDs
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was stored
    pub async fn create_recipe(
        &self,
        author_id: i32,
        recipe: CreateRecipeDto,
    ) -> Result<RecipeDto, Error> {
        validate_not_blank("name", &recipe.name)?;
        validate_not_blank("text", &recipe.text)?;
        validate_cooking_time(recipe.cooking_time)?;
        let ingredients = validate_ingredients(&recipe.ingredients)?;
        validate_tags(&recipe.tags)?;

        let txn = self.db.begin().await?;

        ensure_ingredients_exist(&txn, &ingredients).await?;
        ensure_tags_exist(&txn, &recipe.tags).await?;

        let created = RecipeRepository::new(&txn)
            .create(NewRecipe {
                author_id,
                name: recipe.name.trim(),
                image: recipe.image.as_deref(),
                text: &recipe.text,
                cooking_time: recipe.cooking_time,
            })
            .await?;
        RecipeIngredientRepository::new(&txn)
            .create_many(created.id, &ingredients)
            .await?;
        RecipeTagRepository::new(&txn)
            .create_many(created.id, &recipe.tags)
            .await?;

        txn.commit().await?;

        tracing::debug!(recipe_id = %created.id, author_id = %author_id, "Created recipe");

        self.to_dto(Some(author_id), created).await
    }

    /// Applies a partial update to a recipe owned by `user_id`.
    ///
    /// Present `ingredients` or `tags` replace the stored sets entirely; absent fields keep
    /// their stored values.
    ///
    /// # Returns
    /// - `Ok(RecipeDto)` - The updated recipe
    /// - `Err(Error::NotFound)` - No recipe with the provided ID
    /// - `Err(Error::AuthError(AuthError::PermissionDenied))` - Recipe belongs to another user
    /// - `Err(Error::ValidationError)` - A present field failed validation
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was changed
    pub async fn update_recipe(
        &self,
        user_id: i32,
        recipe_id: i32,
        changes: UpdateRecipeDto,
    ) -> Result<RecipeDto, Error> {
        let recipe = self.find(recipe_id).await?;
        if recipe.author_id != user_id {
            return Err(AuthError::PermissionDenied.into());
        }

        if let Some(name) = &changes.name {
            validate_not_blank("name", name)?;
        }
        if let Some(text) = &changes.text {
            validate_not_blank("text", text)?;
        }
        if let Some(cooking_time) = changes.cooking_time {
            validate_cooking_time(cooking_time)?;
        }
        let ingredients = changes
            .ingredients
            .as_deref()
            .map(validate_ingredients)
            .transpose()?;
        if let Some(tags) = &changes.tags {
            validate_tags(tags)?;
        }

        let txn = self.db.begin().await?;

        if let Some(ingredients) = &ingredients {
            ensure_ingredients_exist(&txn, ingredients).await?;

            let recipe_ingredient_repo = RecipeIngredientRepository::new(&txn);
            recipe_ingredient_repo.delete_by_recipe_id(recipe.id).await?;
            recipe_ingredient_repo
                .create_many(recipe.id, ingredients)
                .await?;
        }

        if let Some(tags) = &changes.tags {
            ensure_tags_exist(&txn, tags).await?;

            let recipe_tag_repo = RecipeTagRepository::new(&txn);
            recipe_tag_repo.delete_by_recipe_id(recipe.id).await?;
            recipe_tag_repo.create_many(recipe.id, tags).await?;
        }

        let updated = RecipeRepository::new(&txn)
            .update(
                recipe,
                RecipeChanges {
                    name: changes.name.as_deref().map(str::trim),
                    image: changes.image.as_deref(),
                    text: changes.text.as_deref(),
                    cooking_time: changes.cooking_time,
                },
            )
            .await?;

        txn.commit().await?;

        self.to_dto(Some(user_id), updated).await
    }

    /// Deletes a recipe owned by `user_id`, removing its favorites and cart entries too.
    ///
    /// # Returns
    /// - `Ok(())` - Recipe deleted
    /// - `Err(Error::NotFound)` - No recipe with the provided ID
    /// - `Err(Error::AuthError(AuthError::PermissionDenied))` - Recipe belongs to another user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_recipe(&self, user_id: i32, recipe_id: i32) -> Result<(), Error> {
        let recipe = self.find(recipe_id).await?;
        if recipe.author_id != user_id {
            return Err(AuthError::PermissionDenied.into());
        }

        RecipeRepository::new(self.db).delete(recipe.id).await?;

        Ok(())
    }

    async fn find(&self, recipe_id: i32) -> Result<RecipeModel, Error> {
        RecipeRepository::new(self.db)
            .get_by_id(recipe_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("recipe {}", recipe_id)))
    }

    async fn to_dto(
        &self,
        viewer_id: Option<i32>,
        recipe: RecipeModel,
    ) -> Result<RecipeDto, Error> {
        self.to_dtos(viewer_id, vec![recipe])
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError("Recipe lost while building response".to_string()))
    }

    /// Assembles full recipe DTOs with a fixed number of queries regardless of the number
    /// of recipes
    async fn to_dtos(
        &self,
        viewer_id: Option<i32>,
        recipes: Vec<RecipeModel>,
    ) -> Result<Vec<RecipeDto>, Error> {
        if recipes.is_empty() {
            return Ok(Vec::new());
        }

        let recipe_ids: Vec<i32> = recipes.iter().map(|r| r.id).collect();
        let mut author_ids: Vec<i32> = recipes.iter().map(|r| r.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors = UserRepository::new(self.db)
            .get_many_by_ids(&author_ids)
            .await?;
        let followed = followed_among(self.db, viewer_id, &authors).await?;
        let authors: HashMap<i32, _> = authors
            .into_iter()
            .map(|author| {
                let is_subscribed = followed.contains(&author.id);
                (author.id, user_dto(author, is_subscribed))
            })
            .collect();

        let mut tags: HashMap<i32, Vec<TagDto>> = HashMap::new();
        for (recipe_id, tag) in RecipeTagRepository::new(self.db)
            .get_tags_by_recipe_ids(&recipe_ids)
            .await?
        {
            tags.entry(recipe_id).or_default().push(tag.into());
        }

        let mut ingredients: HashMap<i32, Vec<RecipeIngredientDto>> = HashMap::new();
        for (row, ingredient) in RecipeIngredientRepository::new(self.db)
            .get_by_recipe_ids(&recipe_ids)
            .await?
        {
            ingredients
                .entry(row.recipe_id)
                .or_default()
                .push(RecipeIngredientDto {
                    id: ingredient.id,
                    name: ingredient.name,
                    measurement_unit: ingredient.measurement_unit,
                    amount: row.amount,
                });
        }

        let (favorited, in_cart): (HashSet<i32>, HashSet<i32>) = match viewer_id {
            Some(viewer_id) => (
                FavoriteRepository::new(self.db)
                    .get_favorited_among(viewer_id, &recipe_ids)
                    .await?
                    .into_iter()
                    .collect(),
                ShoppingCartRepository::new(self.db)
                    .get_in_cart_among(viewer_id, &recipe_ids)
                    .await?
                    .into_iter()
                    .collect(),
            ),
            None => (HashSet::new(), HashSet::new()),
        };

        recipes
            .into_iter()
            .map(|recipe| -> Result<RecipeDto, Error> {
                let author = authors.get(&recipe.author_id).cloned().ok_or_else(|| {
                    // Only possible if the author foreign key is not enforced
                    Error::InternalError(format!(
                        "Author {} of recipe {} not found",
                        recipe.author_id, recipe.id
                    ))
                })?;

                Ok(RecipeDto {
                    id: recipe.id,
                    tags: tags.remove(&recipe.id).unwrap_or_default(),
                    author,
                    ingredients: ingredients.remove(&recipe.id).unwrap_or_default(),
                    is_favorited: favorited.contains(&recipe.id),
                    is_in_shopping_cart: in_cart.contains(&recipe.id),
                    name: recipe.name,
                    image: recipe.image,
                    text: recipe.text,
                    cooking_time: recipe.cooking_time,
                })
            })
            .collect()
    }
}

/// Rejects the first ingredient ID that does not exist
async fn ensure_ingredients_exist<C: ConnectionTrait>(
    db: &C,
    ingredients: &[(i32, i32)],
) -> Result<(), Error> {
    let ids: Vec<i32> = ingredients.iter().map(|&(id, _)| id).collect();
    let found: HashSet<i32> = IngredientRepository::new(db)
        .get_many_by_ids(&ids)
        .await?
        .into_iter()
        .map(|i| i.id)
        .collect();

    match ids.into_iter().find(|id| !found.contains(id)) {
        Some(missing) => Err(ValidationError::UnknownIngredient(missing).into()),
        None => Ok(()),
    }
}

/// Rejects the first tag ID that does not exist
async fn ensure_tags_exist<C: ConnectionTrait>(db: &C, tag_ids: &[i32]) -> Result<(), Error> {
    let found: HashSet<i32> = TagRepository::new(db)
        .get_many_by_ids(tag_ids)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();

    match tag_ids.iter().find(|id| !found.contains(id)) {
        Some(&missing) => Err(ValidationError::UnknownTag(missing).into()),
        None => Ok(()),
    }
}
