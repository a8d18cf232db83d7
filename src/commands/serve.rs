//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    let config = apply_overrides(args, config);
    tracing::info!(store = %config.store_backend, "Starting server...");

    let app_state = AppState::from_config(config.clone()).await?;
    let app = create_router(app_state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

fn apply_overrides(args: ServeArgs, mut config: Config) -> Config {
    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }
    if let Some(store) = args.store {
        config.store_backend = store;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreBackend;

    #[test]
    fn test_flags_override_config() {
        let args = ServeArgs {
            host: Some("127.0.0.1".into()),
            port: Some(9000),
            store: Some(StoreBackend::Mongo),
        };

        let config = apply_overrides(args, Config::for_testing());
        assert_eq!(config.server_addr(), "127.0.0.1:9000");
        assert_eq!(config.store_backend, StoreBackend::Mongo);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let base = Config::for_testing();
        let config = apply_overrides(ServeArgs::default(), base.clone());

        assert_eq!(config.server_addr(), base.server_addr());
        assert_eq!(config.store_backend, StoreBackend::Memory);
    }
}
