//! Token authentication extractors.
//!
//! Clients authenticate with an `Authorization: Token <key>` header. Headers using another
//! scheme are ignored, so such requests are treated as anonymous.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel},
    service::auth::AuthService,
};

const TOKEN_SCHEME: &str = "Token";

/// The authenticated user of a request, rejects anonymous requests with 401
pub struct AuthUser(pub UserModel);

/// The authenticated user of a request if any
///
/// A header carrying an unknown token is still rejected with 401.
pub struct MaybeAuthUser(pub Option<UserModel>);

impl MaybeAuthUser {
    pub fn id(&self) -> Option<i32> {
        self.0.as_ref().map(|user| user.id)
    }
}

/// Reads the token key from the `Authorization` header
///
/// # Returns
/// - `Ok(Some(key))` - Header uses the token scheme
/// - `Ok(None)` - Header absent or using another scheme
/// - `Err(AuthError::InvalidToken)` - Token scheme without a usable key
fn token_from_headers(headers: &HeaderMap) -> Result<Option<String>, AuthError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };
    let value = value.to_str().map_err(|_| AuthError::InvalidToken)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(key), None) if scheme.eq_ignore_ascii_case(TOKEN_SCHEME) => {
            Ok(Some(key.to_string()))
        }
        (Some(scheme), _, _) if scheme.eq_ignore_ascii_case(TOKEN_SCHEME) => {
            Err(AuthError::InvalidToken)
        }
        _ => Ok(None),
    }
}

async fn resolve_user(parts: &Parts, state: &AppState) -> Result<Option<UserModel>, Error> {
    let Some(key) = token_from_headers(&parts.headers)? else {
        return Ok(None);
    };

    match AuthService::new(&state.db).authenticate(&key).await? {
        Some(user) => Ok(Some(user)),
        None => Err(AuthError::InvalidToken.into()),
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_user(parts, state)
            .await?
            .map(AuthUser)
            .ok_or_else(|| AuthError::MissingToken.into())
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(resolve_user(parts, state).await?))
    }
}
