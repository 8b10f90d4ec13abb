use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, ingredient::IngredientDto},
    server::{
        data::ingredient::IngredientRepository, error::Error, model::app::AppState,
        util::query::QueryParams,
    },
};

pub static INGREDIENT_TAG: &str = "ingredients";

/// List ingredients
///
/// Unpaginated. `name` narrows the list to ingredients whose name starts with the value,
/// ignoring case.
#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = INGREDIENT_TAG,
    params(("name" = Option<String>, Query, description = "Case-insensitive name prefix")),
    responses(
        (status = 200, description = "Matching ingredients ordered by name", body = Vec<IngredientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<impl IntoResponse, Error> {
    let ingredients = IngredientRepository::new(&state.db)
        .get_all(params.get("name"))
        .await?;

    let ingredient_dtos: Vec<IngredientDto> = ingredients.into_iter().map(Into::into).collect();

    Ok(Json(ingredient_dtos))
}

/// Get a single ingredient
#[utoipa::path(
    get,
    path = "/api/ingredients/{id}",
    tag = INGREDIENT_TAG,
    params(("id" = i32, Path, description = "Ingredient ID")),
    responses(
        (status = 200, description = "Ingredient found", body = IngredientDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredient(
    State(state): State<AppState>,
    Path(ingredient_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(ingredient) = IngredientRepository::new(&state.db)
        .get_by_id(ingredient_id)
        .await?
    else {
        return Err(Error::NotFound(format!("ingredient {}", ingredient_id)));
    };

    Ok(Json(IngredientDto::from(ingredient)))
}
