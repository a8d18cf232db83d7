//! Database connection and initialization.

use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, IndexOptions},
    Client, IndexModel,
};

use crate::config::{
    Config, EMAIL_INDEX, ITEMS_COLLECTION, MONGODB_CONNECT_TIMEOUT_SECS, MONGODB_MAX_POOL_SIZE,
    MONGODB_MIN_POOL_SIZE, MONGODB_SERVER_SELECTION_TIMEOUT_SECS, OWNER_INDEX, USERNAME_INDEX,
    USERS_COLLECTION,
};
use crate::errors::AppResult;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    /// Connect to MongoDB and make sure the indexes the repositories rely on exist.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        tracing::info!(database = %config.mongodb_database, "Connecting to MongoDB");

        let mut options = ClientOptions::parse(config.mongodb_url.as_str()).await?;
        options.max_pool_size = Some(MONGODB_MAX_POOL_SIZE);
        options.min_pool_size = Some(MONGODB_MIN_POOL_SIZE);
        options.connect_timeout = Some(Duration::from_secs(MONGODB_CONNECT_TIMEOUT_SECS));
        options.server_selection_timeout =
            Some(Duration::from_secs(MONGODB_SERVER_SELECTION_TIMEOUT_SECS));
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)?;
        let db = client.database(&config.mongodb_database);

        let database = Self { db };
        database.ping().await?;
        database.ensure_indexes().await?;

        tracing::info!("MongoDB connected and indexes ensured");
        Ok(database)
    }

    /// Get a handle to the application database.
    pub fn database(&self) -> &mongodb::Database {
        &self.db
    }

    /// Create the unique and lookup indexes. Idempotent.
    ///
    /// The unique indexes turn registration into a conditional insert; their
    /// names appear in duplicate key errors and identify the conflicting field.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let users = self.db.collection::<mongodb::bson::Document>(USERS_COLLECTION);
        users
            .create_indexes([
                unique_index("username", USERNAME_INDEX),
                unique_index("email", EMAIL_INDEX),
            ])
            .await?;

        let items = self.db.collection::<mongodb::bson::Document>(ITEMS_COLLECTION);
        items
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "owner_id": 1 })
                    .options(IndexOptions::builder().name(OWNER_INDEX.to_string()).build())
                    .build(),
            )
            .await?;

        Ok(())
    }

    /// Check database connectivity.
    pub async fn ping(&self) -> AppResult<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

fn unique_index(field: &str, name: &str) -> IndexModel {
    let mut keys = mongodb::bson::Document::new();
    keys.insert(field, 1);

    IndexModel::builder()
        .keys(keys)
        .options(
            IndexOptions::builder()
                .unique(true)
                .name(name.to_string())
                .build(),
        )
        .build()
}
