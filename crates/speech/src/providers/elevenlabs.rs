//! ElevenLabs Text-to-Speech provider
//!
//! Callback-based adapter: `generate_speech` returns immediately and the
//! HTTP call runs on a spawned task, reporting its outcome through the
//! supplied callback exactly once. Request validation failures (URL,
//! serialization) are reported through the same callback before any
//! network activity.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{Client, Url};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::{CallbackTextToSpeech, SynthesisCallback};

/// Classify an HTTP status code as a synthesis success
///
/// Only 200 through 299 count; informational and redirect statuses fail.
pub(crate) const fn is_success_status(code: u16) -> bool {
    matches!(code, 200..=299)
}

/// ElevenLabs speech provider implementing callback-based TTS
#[derive(Debug, Clone)]
pub struct ElevenLabsProvider {
    client: Client,
    config: SpeechConfig,
}

impl ElevenLabsProvider {
    /// Create a new ElevenLabs provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid
    /// or the ElevenLabs API key is missing.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        if config.elevenlabs_api_key.is_none() {
            return Err(SpeechError::Configuration(
                "ElevenLabs API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Get the API key
    fn api_key(&self) -> &str {
        self.config.elevenlabs_api_key.as_deref().unwrap_or_default()
    }

    /// Build the synthesis endpoint URL for a voice
    fn tts_url(&self, voice_id: &str) -> String {
        format!("{}/text-to-speech/{voice_id}", self.config.elevenlabs_base_url)
    }

    async fn execute(
        client: Client,
        url: Url,
        api_key: String,
        body: Vec<u8>,
    ) -> Result<Bytes, SpeechError> {
        let response = client
            .post(url)
            .header("xi-api-key", &api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !is_success_status(status) {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status, body = %body, "ElevenLabs synthesis request failed");
            return Err(SpeechError::Status { code: status, body });
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Network(e.to_string()))?;

        if audio.is_empty() {
            return Err(SpeechError::EmptyBody);
        }

        debug!(audio_size = audio.len(), "ElevenLabs synthesis complete");
        Ok(audio)
    }
}

/// ElevenLabs TTS request body
#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
    voice_settings: VoiceSettings<'a>,
}

#[derive(Debug, Serialize)]
struct VoiceSettings<'a> {
    model_id: &'a str,
    stability: f32,
    similarity_boost: f32,
}

impl CallbackTextToSpeech for ElevenLabsProvider {
    fn generate_speech(&self, text: &str, voice_id: &str, on_result: SynthesisCallback) {
        let url = match Url::parse(&self.tts_url(voice_id)) {
            Ok(url) => url,
            Err(e) => {
                on_result(Err(SpeechError::InvalidUrl(e.to_string())));
                return;
            }
        };

        let request = TtsRequest {
            text,
            voice_settings: VoiceSettings {
                model_id: &self.config.elevenlabs_model,
                stability: self.config.stability,
                similarity_boost: self.config.similarity_boost,
            },
        };

        let body = match serde_json::to_vec(&request) {
            Ok(body) => body,
            Err(e) => {
                on_result(Err(SpeechError::Serialization(e.to_string())));
                return;
            }
        };

        debug!(text_len = text.len(), voice_id = %voice_id, "Sending ElevenLabs synthesis request");

        let client = self.client.clone();
        let api_key = self.api_key().to_string();
        tokio::spawn(async move {
            // Bind first: awaiting inline would hold a borrow of the
            // non-Sync callback across the await and the task would not
            // be Send.
            let result = Self::execute(client, url, api_key, body).await;
            on_result(result);
        });
    }
}
