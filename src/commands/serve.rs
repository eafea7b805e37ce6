//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::connect_user_repository;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    let backend = args.storage.unwrap_or(config.storage);
    tracing::info!(storage = %backend, "Starting server...");

    let repo = connect_user_repository(&config, backend).await?;
    let app = create_router(AppState::from_repository(repo));

    let host = args.host.unwrap_or_else(|| config.server_host.clone());
    let port = args.port.unwrap_or(config.server_port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
