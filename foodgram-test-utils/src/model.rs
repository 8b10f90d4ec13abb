//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main foodgram crate to keep test signatures
//! consistent across crates.

/// Type alias for Foodgram user database model.
pub type UserModel = entity::foodgram_user::Model;

/// Type alias for API token database model.
pub type AuthTokenModel = entity::auth_token::Model;

/// Type alias for tag database model.
pub type TagModel = entity::tag::Model;

/// Type alias for ingredient database model.
pub type IngredientModel = entity::ingredient::Model;

/// Type alias for recipe database model.
pub type RecipeModel = entity::recipe::Model;

/// Type alias for recipe ingredient quantity database model.
pub type RecipeIngredientModel = entity::recipe_ingredient::Model;

/// Type alias for favorite database model.
pub type FavoriteModel = entity::favorite::Model;

/// Type alias for shopping cart entry database model.
pub type ShoppingCartModel = entity::shopping_cart::Model;

/// Type alias for subscription database model.
pub type FollowModel = entity::follow::Model;
