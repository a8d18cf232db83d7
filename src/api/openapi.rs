//! OpenAPI documentation configuration.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{item_handler, user_handler};
use crate::domain::{Item, ItemInput, LoginRequest, RegisterUser, User};

/// OpenAPI documentation for the todo backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo Backend",
        version = "0.1.0",
        description = "Users, sessions and todo items over MongoDB"
    ),
    paths(
        user_handler::register,
        user_handler::login,
        user_handler::get_current_user,
        user_handler::get_user,
        item_handler::create_item,
        item_handler::list_own_items,
        item_handler::get_item,
        item_handler::list_user_items,
        item_handler::update_item,
        item_handler::delete_item,
    ),
    components(schemas(User, RegisterUser, LoginRequest, Item, ItemInput)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Registration, login and profiles"),
        (name = "Items", description = "Todo item management")
    )
)]
pub struct ApiDoc;

/// Bearer token and session cookie schemes
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token issued by /users/login"))
                        .build(),
                ),
            );
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("SESSION"))),
            );
        }
    }
}
