use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        auth::SetPasswordDto,
        user::{CreateUserDto, CreatedUserDto, SubscriptionDto, UserDto},
    },
    server::{
        controller::util::auth_user::{AuthUser, MaybeAuthUser},
        error::Error,
        model::{app::AppState, db::user_dto},
        service::{follow::FollowService, user::UserService},
        util::query::{OffsetRequest, PageRequest, QueryParams},
    },
};

pub static USER_TAG: &str = "users";

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = CreatedUserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let created = UserService::new(&state.db).register(user).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// List users
///
/// Paginated with `limit` and `offset`, ordered by ID.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Page size, defaults to 6"),
        ("offset" = Option<u64>, Query, description = "Number of users to skip"),
    ),
    responses(
        (status = 200, description = "Page of users", body = PaginatedDto<UserDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    params: QueryParams,
) -> Result<impl IntoResponse, Error> {
    let window = OffsetRequest::from_params(&params)?;

    let (users, count) = UserService::new(&state.db)
        .get_users(viewer.id(), window)
        .await?;

    Ok(Json(window.paginate(&params, users, count)?))
}

/// Get the current user
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    security(("token" = [])),
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(AuthUser(user): AuthUser) -> Result<impl IntoResponse, Error> {
    Ok(Json(user_dto(user, false)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db)
        .get_user(viewer.id(), user_id)
        .await?;

    Ok(Json(user))
}

/// Change the current user's password
#[utoipa::path(
    post,
    path = "/api/users/set_password",
    tag = USER_TAG,
    security(("token" = [])),
    request_body = SetPasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Wrong current password or weak new password", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_password(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(passwords): Json<SetPasswordDto>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db)
        .set_password(&user, &passwords.current_password, &passwords.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the authors the current user is subscribed to
///
/// Paginated with `page` and `limit`. Each author carries their newest recipes, cut to
/// `recipes_limit` when provided.
#[utoipa::path(
    get,
    path = "/api/users/subscriptions",
    tag = USER_TAG,
    security(("token" = [])),
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("limit" = Option<u64>, Query, description = "Page size, defaults to 6"),
        ("recipes_limit" = Option<u64>, Query, description = "Maximum recipes per author"),
    ),
    responses(
        (status = 200, description = "Page of subscriptions", body = PaginatedDto<SubscriptionDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscriptions(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    params: QueryParams,
) -> Result<impl IntoResponse, Error> {
    let page = PageRequest::from_params(&params)?;
    let recipes_limit = params.parse::<u64>("recipes_limit")?;

    let (subscriptions, count) = FollowService::new(&state.db)
        .get_subscriptions(user.id, page, recipes_limit)
        .await?;

    Ok(Json(page.paginate(&params, subscriptions, count)?))
}

/// Subscribe to an author
#[utoipa::path(
    post,
    path = "/api/users/{id}/subscribe",
    tag = USER_TAG,
    security(("token" = [])),
    params(
        ("id" = i32, Path, description = "Author ID"),
        ("recipes_limit" = Option<u64>, Query, description = "Maximum recipes in the response"),
    ),
    responses(
        (status = 201, description = "Subscribed", body = SubscriptionDto),
        (status = 400, description = "Self subscription or already subscribed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(author_id): Path<i32>,
    params: QueryParams,
) -> Result<impl IntoResponse, Error> {
    let recipes_limit = params.parse::<u64>("recipes_limit")?;

    let subscription = FollowService::new(&state.db)
        .subscribe(user.id, author_id, recipes_limit)
        .await?;

    Ok((StatusCode::CREATED, Json(subscription)))
}

/// Unsubscribe from an author
#[utoipa::path(
    delete,
    path = "/api/users/{id}/subscribe",
    tag = USER_TAG,
    security(("token" = [])),
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Unsubscribed"),
        (status = 400, description = "Not subscribed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(author_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    FollowService::new(&state.db)
        .unsubscribe(user.id, author_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
