//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating database models with standard test values.
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests of DTO conversion and other pure logic.

use chrono::Utc;

use crate::{
    constant::{TEST_EMAIL_DOMAIN, TEST_TAG_COLOR, UNUSABLE_PASSWORD_HASH},
    model::{IngredientModel, RecipeModel, TagModel, UserModel},
};

/// Create a mock user database model for testing.
///
/// # Arguments
/// - `id` - Primary key of the user
/// - `username` - Username, also used to derive the email address
pub fn mock_user_model(id: i32, username: &str) -> UserModel {
    UserModel {
        id,
        email: format!("{}@{}", username, TEST_EMAIL_DOMAIN),
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: username.to_string(),
        password_hash: UNUSABLE_PASSWORD_HASH.to_string(),
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock recipe database model for testing.
///
/// # Arguments
/// - `id` - Primary key of the recipe
/// - `author_id` - ID of the authoring user
pub fn mock_recipe_model(id: i32, author_id: i32) -> RecipeModel {
    RecipeModel {
        id,
        author_id,
        name: format!("Recipe {}", id),
        image: None,
        text: "Mix everything and bake".to_string(),
        cooking_time: 30,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock tag database model for testing.
pub fn mock_tag_model(id: i32, slug: &str) -> TagModel {
    TagModel {
        id,
        name: slug.to_uppercase(),
        color: TEST_TAG_COLOR.to_string(),
        slug: slug.to_string(),
    }
}

/// Create a mock ingredient database model for testing.
pub fn mock_ingredient_model(id: i32, name: &str, measurement_unit: &str) -> IngredientModel {
    IngredientModel {
        id,
        name: name.to_string(),
        measurement_unit: measurement_unit.to_string(),
    }
}
