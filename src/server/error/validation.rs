use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::client_error;

/// Rejected request payloads, all of which map to 400 Bad Request.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Field '{0}' may not be blank.")]
    EmptyField(&'static str),
    #[error("Cooking time must be at least 1 minute, got {0}.")]
    InvalidCookingTime(i32),
    #[error("A recipe requires at least one ingredient.")]
    NoIngredients,
    #[error("Amount of ingredient {ingredient_id} must be at least 1, got {amount}.")]
    InvalidAmount { ingredient_id: i32, amount: i32 },
    #[error("Ingredient {0} is listed more than once.")]
    DuplicateIngredient(i32),
    #[error("Ingredient {0} does not exist.")]
    UnknownIngredient(i32),
    #[error("A recipe requires at least one tag.")]
    NoTags,
    #[error("Tag {0} is listed more than once.")]
    DuplicateTag(i32),
    #[error("Tag {0} does not exist.")]
    UnknownTag(i32),
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("A user with that email already exists.")]
    EmailTaken,
    #[error("A user with that username already exists.")]
    UsernameTaken,
    #[error("A user with that email or username already exists.")]
    AccountExists,
    #[error("This password is too short. It must contain at least {0} characters.")]
    PasswordTooShort(usize),
    #[error("This password is entirely numeric.")]
    PasswordNumeric,
    #[error("Both email and password are required.")]
    MissingCredentials,
    #[error("Current password is incorrect.")]
    WrongCurrentPassword,
    #[error("Invalid value for query parameter '{0}'.")]
    InvalidQueryParameter(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request payload: {}", self);

        client_error(StatusCode::BAD_REQUEST, &self)
    }
}
