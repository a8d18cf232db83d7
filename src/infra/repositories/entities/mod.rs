//! MongoDB document definitions
//!
//! These are storage-specific shapes separate from domain models: `_id`
//! keys and snake_case field names that the indexes refer to.

pub mod item;
pub mod user;

pub use item::ItemDocument;
pub use user::UserDocument;
