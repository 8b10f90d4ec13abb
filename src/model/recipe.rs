use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{tag::TagDto, user::UserDto};

/// An ingredient of a recipe along with the quantity required
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredientDto {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDto {
    pub id: i32,
    pub tags: Vec<TagDto>,
    pub author: UserDto,
    pub ingredients: Vec<RecipeIngredientDto>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    pub image: Option<String>,
    pub text: String,
    pub cooking_time: i32,
}

/// Compact recipe representation used by favorites, the shopping cart and subscriptions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShortRecipeDto {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub cooking_time: i32,
}

/// Ingredient reference and quantity within a recipe payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientAmountDto {
    /// ID of an existing ingredient
    pub id: i32,
    pub amount: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeDto {
    pub ingredients: Vec<IngredientAmountDto>,
    /// IDs of existing tags
    pub tags: Vec<i32>,
    /// Opaque image payload such as a base64 data URL
    pub image: Option<String>,
    pub name: String,
    pub text: String,
    /// Cooking time in minutes
    pub cooking_time: i32,
}

/// Partial recipe update, absent fields are left untouched and present
/// `ingredients` or `tags` replace the existing set entirely
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecipeDto {
    pub ingredients: Option<Vec<IngredientAmountDto>>,
    pub tags: Option<Vec<i32>>,
    pub image: Option<String>,
    pub name: Option<String>,
    pub text: Option<String>,
    pub cooking_time: Option<i32>,
}
