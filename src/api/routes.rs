use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::catalog::ExerciseCatalog;
use crate::coach::{audio::STATIC_PREFIX, AudioResolver, Coach, FeedbackResolver};
use crate::collab::{ElevenLabsClient, OpenAiClient};
use crate::config::Config;
use crate::error::AppError;

pub struct AppState {
    pub coach: Coach,
}

impl AppState {
    /// Wire the production collaborators from configuration.
    pub fn from_config(config: &Config, catalog: ExerciseCatalog) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let catalog = Arc::new(catalog);
        let generator = OpenAiClient::new(
            client.clone(),
            &config.openai_base_url,
            &config.openai_api_key,
            &config.openai_model,
        );
        let synthesizer = ElevenLabsClient::new(
            client,
            &config.elevenlabs_base_url,
            &config.elevenlabs_api_key,
        );

        let coach = Coach::new(
            FeedbackResolver::new(Arc::clone(&catalog), Arc::new(generator)),
            AudioResolver::new(catalog, Arc::new(synthesizer), config.use_pre_recorded),
        );

        Ok(Self { coach })
    }
}

pub fn create_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new().route("/health", get(handlers::health));

    Router::new()
        .route("/analyze", post(handlers::analyze))
        .nest("/api", api_routes)
        .nest_service(STATIC_PREFIX, ServeDir::new(static_dir))
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
