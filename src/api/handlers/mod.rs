//! HTTP request handlers.

pub mod item_handler;
pub mod user_handler;

pub use item_handler::item_routes;
pub use user_handler::{public_user_routes, user_routes};
