use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, TokenDto},
    },
    server::{
        controller::util::auth_user::AuthUser, error::Error, model::app::AppState,
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Obtain an API token
///
/// Exchanges an email and password for the account's token. Send the token on later
/// requests as `Authorization: Token <key>`.
///
/// # Responses
/// - 201 (Created): Token issued or the existing token returned
/// - 400 (Bad Request): Missing fields or credentials that do not match an account
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/api/auth/token/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 201, description = "Token issued", body = TokenDto),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_token = AuthService::new(&state.db)
        .login(&credentials.email, &credentials.password)
        .await?;

    Ok((StatusCode::CREATED, Json(TokenDto { auth_token })))
}

/// Revoke the current API token
///
/// # Responses
/// - 204 (No Content): Token deleted
/// - 401 (Unauthorized): Missing or invalid token
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/api/auth/token/logout",
    tag = AUTH_TAG,
    security(("token" = [])),
    responses(
        (status = 204, description = "Token revoked"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, Error> {
    AuthService::new(&state.db).logout(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
