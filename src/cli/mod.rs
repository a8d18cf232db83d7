//! CLI module - Command-line interface for the application.
//!
//! - `serve` - Start the HTTP server
//! - `init-db` - Create MongoDB indexes

pub mod args;

pub use args::{Cli, Commands};
