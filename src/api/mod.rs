//! API layer - HTTP handlers and middleware
//!
//! - Request handlers for users and items
//! - Session middleware
//! - Access policy
//! - Route definitions and OpenAPI docs

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod policy;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use policy::AccessPolicy;
pub use routes::create_router;
pub use state::AppState;
