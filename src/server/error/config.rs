use std::net::AddrParseError;

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set, provide it in the environment or in .env")]
    MissingVar(&'static str),
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
    #[error("BIND_ADDRESS {value:?} is not a socket address: {source}")]
    InvalidBindAddress {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("SHOPPING_LIST_FONT_PATH {0:?} does not point to a font file")]
    FontNotFound(String),
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
