//! Requests dispatched through the full router, covering extractors and path matching.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use foodgram::server::{model::app::AppState, router::routes};
use foodgram_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{body_json, json_body};

async fn send(state: AppState, request: Request<Body>) -> axum::response::Response {
    routes().with_state(state).oneshot(request).await.unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Token {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
/// Expect 401 for a protected route without a token
async fn protected_route_requires_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = send(test.to_app_state(), get("/api/users/me", None)).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(body_json(resp).await["error"].is_string());

    Ok(())
}

#[tokio::test]
/// Expect 401 for an unknown token, even on routes open to anonymous users
async fn unknown_token_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let state: AppState = test.to_app_state();

    let me = send(state.clone(), get("/api/users/me", Some("nope"))).await;
    assert_eq!(me.status(), StatusCode::UNAUTHORIZED);

    let feed = send(state, get("/api/recipes", Some("nope"))).await;
    assert_eq!(feed.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect the token owner from /api/users/me
async fn token_identifies_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user("cook").await?;
    test.user().insert_token(user.id, "cook-token").await?;

    let resp = send(test.to_app_state(), get("/api/users/me", Some("cook-token"))).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], user.id);
    assert_eq!(body["is_subscribed"], false);

    Ok(())
}

#[tokio::test]
/// Expect static segments to win over the ID segment
async fn static_paths_are_not_ids() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user = test.user().insert_user("cook").await?;
    test.user().insert_token(user.id, "cook-token").await?;
    let state: AppState = test.to_app_state();

    let subscriptions = send(
        state.clone(),
        get("/api/users/subscriptions", Some("cook-token")),
    )
    .await;
    assert_eq!(subscriptions.status(), StatusCode::OK);
    assert_eq!(body_json(subscriptions).await["count"], 0);

    let download = send(
        state,
        get("/api/recipes/download_shopping_cart", Some("cook-token")),
    )
    .await;
    assert_eq!(download.status(), StatusCode::OK);
    assert_eq!(
        download.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );

    Ok(())
}

#[tokio::test]
/// Expect 404 with the JSON error body for an unknown recipe
async fn unknown_recipe_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let resp = send(test.to_app_state(), get("/api/recipes/999", None)).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"], "Not found.");

    Ok(())
}

#[tokio::test]
/// Expect ingredients filtered by a case-insensitive name prefix
async fn ingredients_filter_by_prefix() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .with_ingredient("Sugar", "g")
        .with_ingredient("sunflower oil", "ml")
        .with_ingredient("salt", "g")
        .build()
        .await?;

    let resp = send(test.to_app_state(), get("/api/ingredients?name=SU", None)).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|i| i["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Sugar", "sunflower oil"]);

    Ok(())
}

#[tokio::test]
/// Expect register then login to yield a working token
async fn register_and_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    let register = Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(json_body(serde_json::json!({
            "email": "ada@example.com",
            "username": "ada",
            "first_name": "Ada",
            "last_name": "Boulanger",
            "password": "levain-2024"
        })))
        .unwrap();
    let resp = send(state.clone(), register).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let login = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/token/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(json_body(serde_json::json!({
            "email": "ada@example.com",
            "password": "levain-2024"
        })))
        .unwrap();
    let resp = send(state.clone(), login).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    let token = body["auth_token"].as_str().unwrap().to_string();

    let me = send(state, get("/api/users/me", Some(&token))).await;
    assert_eq!(me.status(), StatusCode::OK);
    assert_eq!(body_json(me).await["username"], "ada");

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to be served
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = send(test.to_app_state(), get("/api/docs/openapi.json", None)).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["info"]["title"], "Foodgram");
    assert!(body["paths"]["/api/recipes/{id}"].is_object());

    Ok(())
}
