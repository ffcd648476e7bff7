use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use super::{AnalyzeRequest, HealthResponse};
use crate::api::routes::AppState;
use crate::coach::Analysis;
use crate::error::AppError;

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Analysis>, AppError> {
    // Malformed bodies get the same error shape as every other failure
    let Json(request) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    tracing::info!("Analyzing exercise {:?}", request.exercise);

    let analysis = state.coach.analyze(request.exercise.as_deref()).await?;
    Ok(Json(analysis))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
