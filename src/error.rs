use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::collab::CollaboratorError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Feedback generation failed: {0}")]
    TextGeneration(#[source] CollaboratorError),

    #[error("Speech synthesis failed: {0}")]
    SpeechSynthesis(#[source] CollaboratorError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid exercise catalog: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::TextGeneration(_) => "TEXT_GENERATION_FAILED",
            AppError::SpeechSynthesis(_) => "SPEECH_SYNTHESIS_FAILED",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Catalog(_) => "CATALOG_ERROR",
            AppError::IoError(_) => "IO_ERROR",
            AppError::JsonError(_) => "JSON_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Every failure surfaces as a 500; `code` tells the kinds apart.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let message = self.to_string();

        tracing::error!("Request failed: {} - {}", code, message);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}
