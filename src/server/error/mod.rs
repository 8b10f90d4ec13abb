//! Error types for the Foodgram server application.
//!
//! This module provides the error handling system with specialized error types for the
//! different request domains (authentication, configuration, input validation, relation
//! toggles). All errors implement `IntoResponse` for Axum HTTP responses and use `thiserror`
//! for `Display` and `Error` trait implementations.

pub mod auth;
pub mod config;
pub mod relation;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, relation::RelationError,
        validation::ValidationError,
    },
};

/// Main error type for the Foodgram server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (missing or invalid token, bad credentials, permissions)
/// - Validation errors (rejected request payloads)
/// - Relation errors (favorite, shopping cart and subscription toggles)
/// - External library errors (database, PDF rendering, password hashing, IO)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request payload failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Favorite, shopping cart or subscription toggle rejected.
    #[error(transparent)]
    RelationError(#[from] RelationError),
    /// Requested resource does not exist, the value describes what was looked up.
    #[error("Resource not found: {0}")]
    NotFound(String),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Foodgram's code.
    ///
    /// This error should never occur in normal operation and indicates a programming error.
    #[error("Internal error with Foodgram's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Failed to build the shopping list PDF (font loading, serialization).
    #[error("Failed to render shopping list: {0}")]
    RenderError(String),
    /// Failed to hash a password.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (reading font files, binding the listener).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Errors without a client-facing meaning are treated as internal server errors (500) and
/// logged.
///
/// # Returns
/// - 400 Bad Request - Validation failures, rejected relation toggles, bad login credentials
/// - 401 Unauthorized - Missing or invalid token
/// - 403 Forbidden - Modifying another user's recipe
/// - 404 Not Found - Unknown recipe, user, tag or ingredient
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::RelationError(err) => err.into_response(),
            Self::NotFound(what) => {
                tracing::debug!("Not found: {}", what);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Not found.".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response carrying the error's display message.
pub(crate) fn client_error<E: std::fmt::Display>(status: StatusCode, err: &E) -> Response {
    (
        status,
        Json(ErrorDto {
            error: err.to_string(),
        }),
    )
        .into_response()
}
