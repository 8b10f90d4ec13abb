//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and
//! Swagger UI serves the collected document at `/api/docs`.

use axum::Router;
use utoipa::{
    openapi::{
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        Components,
    },
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Registers the `Authorization: Token <key>` header scheme referenced by protected routes
struct TokenSecurity;

impl Modify for TokenSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::new);
        components.add_security_scheme(
            "token",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "Authorization",
                "Token <key> as returned by /api/auth/token/login",
            ))),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered in one `routes!` call so each path appears once in
/// the OpenAPI document. The specification is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db, shopping_list });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Foodgram", description = "Foodgram recipe sharing API"),
        modifiers(&TokenSecurity),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Token authentication routes"),
            (name = controller::user::USER_TAG, description = "Users, passwords and subscriptions"),
            (name = controller::tag::TAG_TAG, description = "Recipe tags"),
            (name = controller::ingredient::INGREDIENT_TAG, description = "Ingredient reference data"),
            (name = controller::recipe::RECIPE_TAG, description = "Recipes, favorites and shopping cart"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::user::create_user,
            controller::user::get_users
        ))
        .routes(routes!(controller::user::get_me))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::set_password))
        .routes(routes!(controller::user::get_subscriptions))
        .routes(routes!(
            controller::user::subscribe,
            controller::user::unsubscribe
        ))
        .routes(routes!(controller::tag::get_tags))
        .routes(routes!(controller::tag::get_tag))
        .routes(routes!(controller::ingredient::get_ingredients))
        .routes(routes!(controller::ingredient::get_ingredient))
        .routes(routes!(
            controller::recipe::get_recipes,
            controller::recipe::create_recipe
        ))
        .routes(routes!(controller::recipe::download_shopping_cart))
        .routes(routes!(
            controller::recipe::get_recipe,
            controller::recipe::update_recipe,
            controller::recipe::delete_recipe
        ))
        .routes(routes!(
            controller::recipe::add_favorite,
            controller::recipe::remove_favorite
        ))
        .routes(routes!(
            controller::recipe::add_to_shopping_cart,
            controller::recipe::remove_from_shopping_cart
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
