//! Todo backend - users, sessions and todo items over HTTP
//!
//! Users register and log in; logged-in users create, list, update and
//! delete todo items. Records live in MongoDB, one collection per entity,
//! or in memory for local runs and tests.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users, items and password hashing
//! - **services**: Registration, login, sessions and item use cases
//! - **infra**: MongoDB connection and repositories
//! - **api**: HTTP handlers, middleware, access policy and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server against MongoDB
//! todo-backend serve
//!
//! # Start the server with the in-memory store
//! todo-backend serve --store memory
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Item, Password, User};
pub use errors::{AppError, AppResult};
