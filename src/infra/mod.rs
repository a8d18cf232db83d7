//! Infrastructure layer - External systems integration
//!
//! - MongoDB connection and index management
//! - Repositories (MongoDB and in-memory)

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{
    ItemRepository, ItemStore, MemoryItemStore, MemoryUserStore, UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockItemRepository, MockUserRepository};
