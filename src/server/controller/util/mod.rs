//! Request extractors shared by controllers.

pub mod auth_user;
