use std::sync::Arc;

use tracing::debug;

use crate::catalog::{ExerciseCatalog, DEFAULT_VOICE_FILE};
use crate::collab::SpeechSynthesizer;
use crate::error::AppError;

/// URL prefix the static directory is mounted under.
pub const STATIC_PREFIX: &str = "/static";

/// Chooses between pre-recorded clips and live speech synthesis.
pub struct AudioResolver {
    catalog: Arc<ExerciseCatalog>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    use_pre_recorded: bool,
}

impl AudioResolver {
    pub fn new(
        catalog: Arc<ExerciseCatalog>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        use_pre_recorded: bool,
    ) -> Self {
        Self {
            catalog,
            synthesizer,
            use_pre_recorded,
        }
    }

    pub async fn resolve(&self, feedback: &str, exercise: &str) -> Result<String, AppError> {
        if self.use_pre_recorded {
            // Unknown exercises get the default clip, not generated audio.
            let voice_file = self
                .catalog
                .get(exercise)
                .map(|e| e.voice_file.as_str())
                .unwrap_or(DEFAULT_VOICE_FILE);

            debug!("Using pre-recorded clip {}", voice_file);
            return Ok(format!("{}/{}", STATIC_PREFIX, voice_file));
        }

        self.synthesizer
            .synthesize(feedback)
            .await
            .map_err(AppError::SpeechSynthesis)
    }
}
