use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::client_error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication credentials were not provided.")]
    MissingToken,
    #[error("Invalid token.")]
    InvalidToken,
    #[error("Unable to log in with provided credentials.")]
    InvalidCredentials,
    #[error("You do not have permission to perform this action.")]
    PermissionDenied,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::MissingToken | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::PermissionDenied => StatusCode::FORBIDDEN,
        };

        client_error(status, &self)
    }
}
