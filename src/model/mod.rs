//! Request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod auth;
pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
