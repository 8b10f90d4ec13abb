//! Shared helpers for service and controller tests

use axum::{body::Body, response::Response};
use foodgram::{
    model::recipe::{CreateRecipeDto, IngredientAmountDto},
    server::util::query::QueryParams,
};

/// Builds query parameters as the extractor would for `path?pairs`
pub fn query(path: &str, pairs: &[(&str, &str)]) -> QueryParams {
    QueryParams::new(
        path,
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

/// A valid recipe payload using the given `(ingredient_id, amount)` pairs and tag IDs
pub fn recipe_payload(name: &str, ingredients: &[(i32, i32)], tags: &[i32]) -> CreateRecipeDto {
    CreateRecipeDto {
        ingredients: ingredients
            .iter()
            .map(|&(id, amount)| IngredientAmountDto { id, amount })
            .collect(),
        tags: tags.to_vec(),
        image: None,
        name: name.to_string(),
        text: "Stir and serve".to_string(),
        cooking_time: 15,
    }
}

/// Reads a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Request body for router tests
pub fn json_body(value: serde_json::Value) -> Body {
    Body::from(value.to_string())
}
