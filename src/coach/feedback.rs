use std::sync::Arc;

use tracing::debug;

use crate::catalog::ExerciseCatalog;
use crate::collab::{ChatMessage, TextGenerator};
use crate::error::AppError;

pub const COACH_INSTRUCTION: &str =
    "You're a professional fitness coach. Give concise, technical feedback.";

/// Catalog feedback, falling back to generated text for unknown exercises.
pub struct FeedbackResolver {
    catalog: Arc<ExerciseCatalog>,
    generator: Arc<dyn TextGenerator>,
}

impl FeedbackResolver {
    pub fn new(catalog: Arc<ExerciseCatalog>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { catalog, generator }
    }

    pub async fn resolve(&self, exercise: Option<&str>) -> Result<String, AppError> {
        let exercise = exercise
            .ok_or_else(|| AppError::InvalidInput("Field 'exercise' is required".into()))?;

        if let Some(entry) = self.catalog.get(exercise) {
            debug!("Catalog hit for '{}'", entry.key);
            return Ok(entry.feedback.clone());
        }

        debug!("No catalog entry for '{}', generating feedback", exercise);

        let messages = vec![
            ChatMessage::system(COACH_INSTRUCTION),
            ChatMessage::user(format!("Analyze this exercise: {}", exercise)),
        ];

        self.generator
            .generate(messages)
            .await
            .map_err(AppError::TextGeneration)
    }
}
