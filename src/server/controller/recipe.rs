use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        recipe::{CreateRecipeDto, RecipeDto, ShortRecipeDto, UpdateRecipeDto},
    },
    server::{
        controller::util::auth_user::{AuthUser, MaybeAuthUser},
        data::recipe::RecipeFilter,
        error::Error,
        model::app::AppState,
        service::{
            favorite::FavoriteService, recipe::RecipeService,
            shopping_cart::ShoppingCartService, shopping_list::ShoppingListService,
        },
        util::{
            pdf::SHOPPING_LIST_FILE_NAME,
            query::{PageRequest, QueryParams},
        },
    },
};

pub static RECIPE_TAG: &str = "recipes";

/// Builds the feed filter from query parameters
///
/// Favorite and cart flags only apply when the request is authenticated.
fn recipe_filter(params: &QueryParams, viewer_id: Option<i32>) -> Result<RecipeFilter, Error> {
    let mut filter = RecipeFilter {
        author_id: params.parse::<i32>("author")?,
        tag_slugs: params.get_all("tags"),
        ..Default::default()
    };

    if let Some(viewer_id) = viewer_id {
        if params.flag("is_favorited") {
            filter.favorited_by = Some(viewer_id);
        }
        if params.flag("is_in_shopping_cart") {
            filter.in_cart_of = Some(viewer_id);
        }
    }

    Ok(filter)
}

/// List recipes
///
/// Newest first, paginated with `page` and `limit`. Filters combine; repeated `tags` match
/// recipes carrying any of the slugs.
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("limit" = Option<u64>, Query, description = "Page size, defaults to 6"),
        ("author" = Option<i32>, Query, description = "Only recipes by this user"),
        ("tags" = Option<Vec<String>>, Query, description = "Tag slugs, repeatable"),
        ("is_favorited" = Option<String>, Query, description = "`1` for the caller's favorites"),
        ("is_in_shopping_cart" = Option<String>, Query, description = "`1` for recipes in the caller's cart"),
    ),
    responses(
        (status = 200, description = "Page of recipes", body = PaginatedDto<RecipeDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    params: QueryParams,
) -> Result<impl IntoResponse, Error> {
    let page = PageRequest::from_params(&params)?;
    let filter = recipe_filter(&params, viewer.id())?;

    let (recipes, count) = RecipeService::new(&state.db)
        .get_recipes(viewer.id(), &filter, page)
        .await?;

    Ok(Json(page.paginate(&params, recipes, count)?))
}

/// Publish a recipe
#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    security(("token" = [])),
    request_body = CreateRecipeDto,
    responses(
        (status = 201, description = "Recipe created", body = RecipeDto),
        (status = 400, description = "Invalid recipe", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(recipe): Json<CreateRecipeDto>,
) -> Result<impl IntoResponse, Error> {
    let recipe = RecipeService::new(&state.db)
        .create_recipe(user.id, recipe)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Get a recipe
#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Recipe found", body = RecipeDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let recipe = RecipeService::new(&state.db)
        .get_recipe(viewer.id(), recipe_id)
        .await?;

    Ok(Json(recipe))
}

/// Edit a recipe
///
/// Only the author may edit. Present `ingredients` or `tags` replace the stored sets.
#[utoipa::path(
    patch,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    security(("token" = [])),
    params(("id" = i32, Path, description = "Recipe ID")),
    request_body = UpdateRecipeDto,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeDto),
        (status = 400, description = "Invalid recipe", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Recipe belongs to another user", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(recipe_id): Path<i32>,
    Json(changes): Json<UpdateRecipeDto>,
) -> Result<impl IntoResponse, Error> {
    let recipe = RecipeService::new(&state.db)
        .update_recipe(user.id, recipe_id, changes)
        .await?;

    Ok(Json(recipe))
}

/// Delete a recipe
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    security(("token" = [])),
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Recipe belongs to another user", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    RecipeService::new(&state.db)
        .delete_recipe(user.id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a recipe to favorites
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/favorite",
    tag = RECIPE_TAG,
    security(("token" = [])),
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 201, description = "Recipe favorited", body = ShortRecipeDto),
        (status = 400, description = "Recipe already favorited", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let recipe = FavoriteService::new(&state.db)
        .add(user.id, recipe_id)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Remove a recipe from favorites
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/favorite",
    tag = RECIPE_TAG,
    security(("token" = [])),
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 400, description = "Recipe is not a favorite", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove(user.id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a recipe to the shopping cart
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/shopping_cart",
    tag = RECIPE_TAG,
    security(("token" = [])),
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 201, description = "Recipe added to the cart", body = ShortRecipeDto),
        (status = 400, description = "Recipe already in the cart", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_shopping_cart(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let recipe = ShoppingCartService::new(&state.db)
        .add(user.id, recipe_id)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Remove a recipe from the shopping cart
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/shopping_cart",
    tag = RECIPE_TAG,
    security(("token" = [])),
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe removed from the cart"),
        (status = 400, description = "Recipe is not in the cart", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_from_shopping_cart(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ShoppingCartService::new(&state.db)
        .remove(user.id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download the shopping list
///
/// Sums the ingredients of every recipe in the cart into a PDF attachment.
#[utoipa::path(
    get,
    path = "/api/recipes/download_shopping_cart",
    tag = RECIPE_TAG,
    security(("token" = [])),
    responses(
        (status = 200, description = "Shopping list PDF", body = Vec<u8>, content_type = "application/pdf"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_shopping_cart(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, Error> {
    let pdf = ShoppingListService::new(&state.db)
        .export_pdf(user.id, &state.shopping_list)
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", SHOPPING_LIST_FILE_NAME),
            ),
        ],
        pdf,
    ))
}
