use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use crate::error::AppError;

/// Pre-recorded clip used when an exercise has no entry of its own.
pub const DEFAULT_VOICE_FILE: &str = "default.mp3";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub key: String,
    pub feedback: String,
    pub voice_file: String,
}

impl ExerciseEntry {
    pub fn new(key: &str, feedback: &str, voice_file: &str) -> Self {
        Self {
            key: key.to_string(),
            feedback: feedback.to_string(),
            voice_file: voice_file.to_string(),
        }
    }
}

/// Read-only exercise lookup table, keyed by lowercase exercise name.
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    entries: HashMap<String, ExerciseEntry>,
}

impl ExerciseCatalog {
    /// Build a catalog, lowercasing keys. Two entries that collide after
    /// lowercasing are rejected.
    pub fn new(entries: Vec<ExerciseEntry>) -> Result<Self, AppError> {
        let mut map = HashMap::with_capacity(entries.len());

        for mut entry in entries {
            let key = entry.key.trim().to_lowercase();
            if key.is_empty() {
                return Err(AppError::Catalog("Exercise key cannot be empty".into()));
            }
            if map.contains_key(&key) {
                return Err(AppError::Catalog(format!("Duplicate exercise '{}'", key)));
            }
            entry.key = key.clone();
            map.insert(key, entry);
        }

        Ok(Self { entries: map })
    }

    /// Load a catalog from a JSON array of entries.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::Catalog(format!(
                "Catalog file '{}' not found",
                path.display()
            )));
        }

        let entries: Vec<ExerciseEntry> = serde_json::from_reader(File::open(path)?)?;
        Self::new(entries)
    }

    pub fn get(&self, exercise: &str) -> Option<&ExerciseEntry> {
        self.entries.get(&exercise.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ExerciseCatalog {
    fn default() -> Self {
        let entries = [
            ExerciseEntry::new(
                "pushup",
                "Keep your core tight and elbows at 45 degrees.",
                "pushup_feedback.mp3",
            ),
            ExerciseEntry::new(
                "squat",
                "Maintain straight back and knees over toes.",
                "squat_feedback.mp3",
            ),
        ];

        Self {
            entries: entries
                .into_iter()
                .map(|e| (e.key.clone(), e))
                .collect(),
        }
    }
}
