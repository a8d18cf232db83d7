//! Domain layer - Core business entities and logic
//!
//! Users, their todo items and the password value object. No
//! infrastructure concerns live here.

pub mod item;
pub mod password;
pub mod user;

pub use item::{Item, ItemInput};
pub use password::Password;
pub use user::{Identity, LoginRequest, RegisterUser, User};
