use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::client_error;

/// Rejected add/remove of a user-to-recipe or user-to-author association.
#[derive(Error, Debug, PartialEq)]
pub enum RelationError {
    #[error("Recipe is already in favorites.")]
    AlreadyFavorited,
    #[error("Recipe is not in favorites.")]
    NotFavorited,
    #[error("Recipe is already in the shopping cart.")]
    AlreadyInCart,
    #[error("Recipe is not in the shopping cart.")]
    NotInCart,
    #[error("You cannot subscribe to yourself.")]
    SelfSubscription,
    #[error("You are already subscribed to this author.")]
    AlreadySubscribed,
    #[error("You are not subscribed to this author.")]
    NotSubscribed,
}

impl IntoResponse for RelationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected relation change: {}", self);

        client_error(StatusCode::BAD_REQUEST, &self)
    }
}
