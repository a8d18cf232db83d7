//! Application services layer - Use cases and business logic.
//!
//! Services depend on repository traits, not on a concrete store, so the
//! same logic runs over MongoDB or the memory backend.

mod auth_service;
mod item_service;
mod user_service;

pub use auth_service::{AuthService, Authenticator, Claims, SessionToken};
pub use item_service::{ItemManager, ItemService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
