//! Init-db command - Connects to MongoDB and creates the indexes.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the init-db command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    db.ping().await?;

    tracing::info!(database = %config.mongodb_database, "Indexes are in place");
    Ok(())
}
