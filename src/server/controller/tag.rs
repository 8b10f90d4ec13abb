use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, tag::TagDto},
    server::{data::tag::TagRepository, error::Error, model::app::AppState},
};

pub static TAG_TAG: &str = "tags";

/// List all recipe tags
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "All tags", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let tags = TagRepository::new(&state.db).get_all().await?;

    let tag_dtos: Vec<TagDto> = tags.into_iter().map(Into::into).collect();

    Ok(Json(tag_dtos))
}

/// Get a single tag
#[utoipa::path(
    get,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag ID")),
    responses(
        (status = 200, description = "Tag found", body = TagDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(tag) = TagRepository::new(&state.db).get_by_id(tag_id).await? else {
        return Err(Error::NotFound(format!("tag {}", tag_id)));
    };

    Ok(Json(TagDto::from(tag)))
}
