//! Recording fakes for the collaborator traits.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{AudioResolver, Coach, FeedbackResolver};
use crate::catalog::ExerciseCatalog;
use crate::collab::{ChatMessage, CollaboratorError, SpeechSynthesizer, TextGenerator};

pub struct FakeGenerator {
    reply: Option<String>,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl FakeGenerator {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, messages: Vec<ChatMessage>) -> Result<String, CollaboratorError> {
        self.requests.lock().unwrap().push(messages);
        self.reply.clone().ok_or_else(|| CollaboratorError::Api {
            status: 429,
            body: "quota exceeded".into(),
        })
    }
}

pub struct FakeSynthesizer {
    url: Option<String>,
    texts: Mutex<Vec<String>>,
}

impl FakeSynthesizer {
    pub fn returning(url: &str) -> Arc<Self> {
        Arc::new(Self {
            url: Some(url.to_string()),
            texts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            url: None,
            texts: Mutex::new(Vec::new()),
        })
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.texts.lock().unwrap().len()
    }
}

#[async_trait]
impl SpeechSynthesizer for FakeSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<String, CollaboratorError> {
        self.texts.lock().unwrap().push(text.to_string());
        self.url.clone().ok_or(CollaboratorError::EmptyResponse)
    }
}

pub fn coach(
    generator: &Arc<FakeGenerator>,
    synthesizer: &Arc<FakeSynthesizer>,
    use_pre_recorded: bool,
) -> Coach {
    let catalog = Arc::new(ExerciseCatalog::default());
    Coach::new(
        FeedbackResolver::new(
            Arc::clone(&catalog),
            Arc::clone(generator) as Arc<dyn TextGenerator>,
        ),
        AudioResolver::new(
            catalog,
            Arc::clone(synthesizer) as Arc<dyn SpeechSynthesizer>,
            use_pre_recorded,
        ),
    )
}
