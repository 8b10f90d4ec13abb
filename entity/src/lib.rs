//! SeaORM entities for the Foodgram schema.

pub mod prelude;

pub mod auth_token;
pub mod favorite;
pub mod follow;
pub mod foodgram_user;
pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod recipe_tag;
pub mod shopping_cart;
pub mod tag;
