//! Database model type aliases.
//!
//! This module provides type aliases for SeaORM database entity models used throughout the
//! application, so that signatures do not need to spell out `entity::<table>::Model`.

/// Type alias for a registered account.
///
/// # Fields (from `entity::foodgram_user::Model`)
/// - `id` - Primary key
/// - `email` - Unique email address used to log in
/// - `username` - Unique display name
/// - `first_name` / `last_name` - Profile names
/// - `password_hash` - Argon2 PHC string
/// - `created_at` - Timestamp when the account was registered
pub type UserModel = entity::foodgram_user::Model;

/// Type alias for an API token, at most one per user.
pub type AuthTokenModel = entity::auth_token::Model;

/// Type alias for a recipe tag (e.g. breakfast, lunch).
pub type TagModel = entity::tag::Model;

/// Type alias for an ingredient reference entry.
///
/// Ingredients are read-only reference data pairing a name with the unit amounts are
/// measured in.
pub type IngredientModel = entity::ingredient::Model;

/// Type alias for a recipe.
///
/// # Fields (from `entity::recipe::Model`)
/// - `id` - Primary key
/// - `author_id` - Foreign key to the authoring user
/// - `name` - Recipe name
/// - `image` - Opaque image payload, stored as provided
/// - `text` - Cooking instructions
/// - `cooking_time` - Minutes, at least 1
/// - `created_at` - Timestamp when the recipe was published
pub type RecipeModel = entity::recipe::Model;

/// Type alias for an ingredient quantity attached to a recipe.
pub type RecipeIngredientModel = entity::recipe_ingredient::Model;

impl From<TagModel> for crate::model::tag::TagDto {
    fn from(tag: TagModel) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            color: tag.color,
            slug: tag.slug,
        }
    }
}

impl From<IngredientModel> for crate::model::ingredient::IngredientDto {
    fn from(ingredient: IngredientModel) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
            measurement_unit: ingredient.measurement_unit,
        }
    }
}

impl From<RecipeModel> for crate::model::recipe::ShortRecipeDto {
    fn from(recipe: RecipeModel) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            image: recipe.image,
            cooking_time: recipe.cooking_time,
        }
    }
}

impl From<UserModel> for crate::model::user::CreatedUserDto {
    fn from(user: UserModel) -> Self {
        Self {
            email: user.email,
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// Builds the public representation of a user
pub fn user_dto(user: UserModel, is_subscribed: bool) -> crate::model::user::UserDto {
    crate::model::user::UserDto {
        email: user.email,
        id: user.id,
        username: user.username,
        first_name: user.first_name,
        last_name: user.last_name,
        is_subscribed,
    }
}
