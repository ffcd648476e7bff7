use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod catalog;
mod coach;
mod collab;
mod config;
mod error;

use api::routes::{create_router, AppState};
use catalog::ExerciseCatalog;
use config::Config;
use error::AppError;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid address: {}", e)))?;

    let catalog = match &config.catalog_path {
        Some(path) => ExerciseCatalog::load(path)?,
        None => ExerciseCatalog::default(),
    };

    tracing::info!("Coach Feedback Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Static directory: {}", config.static_dir.display());
    tracing::info!("Exercise catalog: {} entries", catalog.len());
    if catalog.is_empty() {
        tracing::warn!("Exercise catalog is empty; every request will use generated feedback");
    }
    if config.use_pre_recorded {
        tracing::info!("Audio mode: pre-recorded");
    } else {
        tracing::info!("Audio mode: live synthesis");
        if config.elevenlabs_api_key.is_empty() {
            tracing::warn!("ELEVENLABS_API is not set; speech synthesis will fail");
        }
    }
    if config.openai_api_key.is_empty() {
        tracing::warn!("OPENAI_API is not set; unknown exercises will fail");
    }

    // Create app state
    let state = Arc::new(AppState::from_config(&config, catalog)?);

    // Create router
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
