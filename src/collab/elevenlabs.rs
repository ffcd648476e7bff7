use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use tracing::info;

use super::{api_error, CollaboratorError, SpeechSynthesizer};

/// "Rachel", one of the stock ElevenLabs voices.
pub const VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
pub const MODEL_ID: &str = "eleven_monolingual_v1";

/// ElevenLabs text-to-speech client. Audio comes back as MP3 and is handed
/// to the browser as a data URL, so nothing is written on the server.
pub struct ElevenLabsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

impl ElevenLabsClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/text-to-speech/{}", self.base_url, VOICE_ID)
    }
}

pub fn mp3_data_url(audio: &[u8]) -> String {
    format!("data:audio/mpeg;base64,{}", STANDARD.encode(audio))
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsClient {
    async fn synthesize(&self, text: &str) -> Result<String, CollaboratorError> {
        info!("Synthesizing {} chars with voice {}", text.chars().count(), VOICE_ID);

        let response = self
            .client
            .post(self.endpoint())
            .header("xi-api-key", &self.api_key)
            .header(reqwest::header::ACCEPT, "audio/mpeg")
            .json(&SpeechRequest {
                text,
                model_id: MODEL_ID,
                voice_settings: VoiceSettings::default(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(CollaboratorError::EmptyResponse);
        }

        Ok(mp3_data_url(&audio))
    }
}
