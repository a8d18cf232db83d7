//! Application route configuration.

use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{item_routes, public_user_routes, user_routes};
use super::middleware::auth_middleware;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Registration and login are public; profile lookups need a session
        .nest(
            "/users",
            public_user_routes().merge(user_routes().route_layer(
                middleware::from_fn_with_state(state.clone(), auth_middleware),
            )),
        )
        .nest(
            "/items",
            item_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Todo backend"
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    store: StoreHealth,
}

#[derive(Serialize)]
struct StoreHealth {
    backend: &'static str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check; pings MongoDB when that backend is active
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store = match &state.database {
        None => StoreHealth {
            backend: "memory",
            status: "healthy",
            error: None,
        },
        Some(db) => match db.ping().await {
            Ok(()) => StoreHealth {
                backend: "mongodb",
                status: "healthy",
                error: None,
            },
            Err(e) => {
                tracing::error!(error = %e, "MongoDB health check failed");
                StoreHealth {
                    backend: "mongodb",
                    status: "unhealthy",
                    error: Some(e.to_string()),
                }
            }
        },
    };

    let healthy = store.status == "healthy";
    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: if healthy { "healthy" } else { "degraded" },
            store,
        }),
    )
}
