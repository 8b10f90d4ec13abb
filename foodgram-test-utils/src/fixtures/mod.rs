//! Test fixture modules for database record creation.
//!
//! - `user` - Foodgram users, API tokens and subscriptions
//! - `recipe` - Tags, ingredients, recipes and the per-user recipe relations
//! - `factory` - In-memory model instances that never touch the database

pub mod factory;
pub mod recipe;
pub mod user;
