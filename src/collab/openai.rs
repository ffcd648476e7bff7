use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{api_error, ChatMessage, CollaboratorError, TextGenerator};

/// OpenAI chat completions client.
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

fn first_message(response: ChatResponse) -> Result<String, CollaboratorError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CollaboratorError::MalformedResponse("no choices returned".into()))?;

    match choice.message.content {
        Some(content) if !content.trim().is_empty() => Ok(content),
        Some(_) => Err(CollaboratorError::EmptyResponse),
        None => Err(CollaboratorError::MalformedResponse(
            "first choice has no message content".into(),
        )),
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(&self, messages: Vec<ChatMessage>) -> Result<String, CollaboratorError> {
        info!("Requesting feedback from {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&ChatRequest {
                model: &self.model,
                messages: &messages,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| CollaboratorError::MalformedResponse(e.to_string()))?;

        let content = first_message(body)?;
        debug!("Generated feedback: {}", content);
        Ok(content)
    }
}
