//! Outbound collaborators: a generative-text service for feedback on
//! exercises the catalog does not know, and a speech-synthesis service that
//! voices the feedback.

pub mod elevenlabs;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use elevenlabs::ElevenLabsClient;
pub use openai::OpenAiClient;

#[derive(thiserror::Error, Debug)]
pub enum CollaboratorError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("service returned an empty response")]
    EmptyResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Produces text from a role-tagged conversation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the text of the first generated message.
    async fn generate(&self, messages: Vec<ChatMessage>) -> Result<String, CollaboratorError>;
}

/// Turns text into playable audio, returning a URL the client can load.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<String, CollaboratorError>;
}

/// Read an error body without letting a second failure mask the first.
pub(crate) async fn api_error(response: reqwest::Response) -> CollaboratorError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    CollaboratorError::Api { status, body }
}

/// Stand-in upstream: serves `router` on an ephemeral local port.
#[cfg(test)]
pub(crate) async fn serve_stub(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(ChatMessage::system("be brief")).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "be brief");
    }

    #[test]
    fn api_error_message_includes_status() {
        let err = CollaboratorError::Api {
            status: 503,
            body: "overloaded".into(),
        };
        assert_eq!(err.to_string(), "service returned 503: overloaded");
    }
}
