use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::recipe::ShortRecipeDto;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub email: String,
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the requesting user is subscribed to this user, always false for anonymous requests
    pub is_subscribed: bool,
}

/// Registration payload
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Returned after registration, the password is never echoed back
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedUserDto {
    pub email: String,
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// An author the requesting user is subscribed to, along with a preview of their recipes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionDto {
    pub email: String,
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    /// Newest recipes first, cut to `recipes_limit` when provided
    pub recipes: Vec<ShortRecipeDto>,
    /// Total number of recipes by the author regardless of `recipes_limit`
    pub recipes_count: u64,
}
