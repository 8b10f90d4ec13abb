use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use foodgram::{
    model::user::CreateUserDto,
    server::{
        controller::{
            user::{create_user, get_users, subscribe, unsubscribe},
            util::auth_user::{AuthUser, MaybeAuthUser},
        },
        model::app::AppState,
    },
};
use foodgram_test_utils::prelude::*;

use crate::util::{body_json, query};

#[tokio::test]
/// Expect 201 without the password echoed back
async fn create_user_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = create_user(
        State(state),
        Json(CreateUserDto {
            email: "marcella@example.com".to_string(),
            username: "marcella".to_string(),
            first_name: "Marcella".to_string(),
            last_name: "Hazan".to_string(),
            password: "b0lognese".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["username"], "marcella");
    assert!(body.get("password").is_none());

    Ok(())
}

#[tokio::test]
/// Expect a limit/offset page with a link to the next window
async fn get_users_paginates_by_offset() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    for username in ["ann", "bob", "cid"] {
        test.user().insert_user(username).await?;
    }
    let state: AppState = test.to_app_state();

    let resp = get_users(
        State(state),
        MaybeAuthUser(None),
        query("/api/users", &[("limit", "1")]),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["next"], "/api/users?limit=1&offset=1");
    assert!(body["previous"].is_null());
    assert_eq!(body["results"][0]["username"], "ann");
    assert_eq!(body["results"][0]["is_subscribed"], false);

    Ok(())
}

#[tokio::test]
/// Expect 400 when subscribing to oneself
async fn subscribe_rejects_self() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user = test.user().insert_user("cook").await?;
    let state: AppState = test.to_app_state();

    let resp = subscribe(
        State(state),
        AuthUser(user.clone()),
        Path(user.id),
        query("/api/users/1/subscribe", &[]),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 201 on the first subscription, 400 on the second, 204 on unsubscribe
async fn subscribe_then_unsubscribe() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let reader = test.user().insert_user("reader").await?;
    let author = test.user().insert_user("author").await?;
    let state: AppState = test.to_app_state();

    let first = subscribe(
        State(state.clone()),
        AuthUser(reader.clone()),
        Path(author.id),
        query("/api/users/2/subscribe", &[]),
    )
    .await
    .into_response();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = subscribe(
        State(state.clone()),
        AuthUser(reader.clone()),
        Path(author.id),
        query("/api/users/2/subscribe", &[]),
    )
    .await
    .into_response();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let removed = unsubscribe(State(state), AuthUser(reader), Path(author.id))
        .await
        .into_response();
    assert_eq!(removed.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
/// Expect 404 when subscribing to a user that does not exist
async fn subscribe_returns_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let reader = test.user().insert_user("reader").await?;
    let state: AppState = test.to_app_state();

    let resp = subscribe(
        State(state),
        AuthUser(reader),
        Path(404),
        query("/api/users/404/subscribe", &[]),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Not found.");

    Ok(())
}
