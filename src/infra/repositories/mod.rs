//! Repository layer - Data access abstraction
//!
//! One repository per entity, each backed by its own collection. The
//! MongoDB stores are the production backends; the memory stores honour
//! the same contracts.

pub(crate) mod entities;
mod item_repository;
mod memory;
mod user_repository;

pub use item_repository::{ItemRepository, ItemStore};
pub use memory::{MemoryItemStore, MemoryUserStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests
#[cfg(any(test, feature = "test-utils"))]
pub use item_repository::MockItemRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
