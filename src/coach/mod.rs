pub mod audio;
pub mod feedback;

#[cfg(test)]
pub mod testing;

use serde::Serialize;

use crate::error::AppError;

pub use audio::AudioResolver;
pub use feedback::FeedbackResolver;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub feedback: String,
    pub audio_url: String,
}

/// Feedback first, then audio for that feedback.
pub struct Coach {
    feedback: FeedbackResolver,
    audio: AudioResolver,
}

impl Coach {
    pub fn new(feedback: FeedbackResolver, audio: AudioResolver) -> Self {
        Self { feedback, audio }
    }

    pub async fn analyze(&self, exercise: Option<&str>) -> Result<Analysis, AppError> {
        let feedback = self.feedback.resolve(exercise).await?;
        // resolve() has already rejected a missing name
        let exercise = exercise.unwrap_or_default();
        let audio_url = self.audio.resolve(&feedback, exercise).await?;

        Ok(Analysis {
            feedback,
            audio_url,
        })
    }
}
