//! HTTP controller endpoints for the Foodgram web API.
//!
//! This module contains Axum handlers for token authentication, users and subscriptions,
//! tags, ingredients and recipes. Controllers extract and check request inputs, call the
//! services and map results to HTTP responses, and carry utoipa annotations for the OpenAPI
//! documentation.

pub mod auth;
pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
pub mod util;
