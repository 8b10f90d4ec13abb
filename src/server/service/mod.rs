//! Service layer for business logic.
//!
//! This module contains the services that validate requests, coordinate repositories and
//! assemble response DTOs: authentication, user accounts and subscriptions, recipes,
//! favorites, the shopping cart and shopping list export.

pub mod auth;
pub mod favorite;
pub mod follow;
pub mod recipe;
pub mod shopping_cart;
pub mod shopping_list;
pub mod user;
