//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::config::StoreBackend;

/// Todo backend - users, sessions and todo items over HTTP
#[derive(Parser, Debug)]
#[command(name = "todo-backend")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Create the MongoDB indexes and exit
    InitDb,
}

/// Arguments for the serve command.
///
/// Each flag overrides the matching environment setting.
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Document store backend
    #[arg(short, long, value_enum)]
    pub store: Option<StoreBackend>,
}
