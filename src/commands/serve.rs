//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::Services;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Iniciando el servidor del CRM...");

    // Connect and apply pending migrations
    let db = Database::connect(&config).await;

    let services = Services::from_connection(db.get_connection());
    let app_state = AppState::from(services);

    let app = create_router(app_state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("No se pudo escuchar en {}: {}", addr, e)))?;

    tracing::info!("Servidor disponible en http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Error del servidor: {}", e)))?;

    Ok(())
}
