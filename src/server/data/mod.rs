//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories wrap SeaORM queries for a single table each and are generic over
//! [`sea_orm::ConnectionTrait`] so that services can run them inside a transaction.

pub mod auth_token;
pub mod favorite;
pub mod follow;
pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod recipe_tag;
pub mod shopping_cart;
pub mod tag;
pub mod user;

use sea_orm::{DbErr, SqlErr};

/// Returns true when the error was raised by a unique or primary key constraint.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
