//! OpenAI speech provider
//!
//! Implements `TextToSpeech` using the OpenAI speech endpoint and
//! `SpeechToText` using Whisper transcription. Synthesis responses arrive
//! as a chunked byte stream and are accumulated into one buffer before
//! being returned; transcription uploads are hand-encoded multipart bodies
//! with a fresh UUID boundary per request.

use std::time::Duration;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::multipart::MultipartBody;
use crate::ports::{SpeechToText, TextToSpeech};

/// File name reported for uploads when the caller has none
pub const DEFAULT_RECORDING_FILE_NAME: &str = "recording.m4a";

/// OpenAI speech provider implementing both TTS and STT
#[derive(Debug, Clone)]
pub struct OpenAIProvider {
    client: Client,
    config: SpeechConfig,
}

impl OpenAIProvider {
    /// Create a new OpenAI speech provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid
    /// or the OpenAI API key is missing.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        if config.openai_api_key.is_none() {
            return Err(SpeechError::Configuration(
                "OpenAI API key is required".to_string(),
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
        self.config.openai_api_key.as_deref().unwrap_or_default()
    }

    /// Build the TTS endpoint URL
    fn tts_url(&self) -> String {
        format!("{}/audio/speech", self.config.openai_base_url)
    }

    /// Build the STT endpoint URL
    fn stt_url(&self) -> String {
        format!("{}/audio/transcriptions", self.config.openai_base_url)
    }
}

/// OpenAI TTS request body
#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
}

/// Accumulate a chunked byte stream into a single buffer
///
/// Chunks are concatenated in delivery order; an empty stream yields an
/// empty buffer rather than an error.
pub(crate) async fn collect_chunks<S, E>(stream: S) -> Result<Bytes, SpeechError>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Into<SpeechError>,
{
    let mut stream = std::pin::pin!(stream);
    let mut buffer = BytesMut::new();

    while let Some(chunk) = stream.next().await {
        buffer.extend_from_slice(&chunk.map_err(Into::into)?);
    }

    Ok(buffer.freeze())
}

#[async_trait]
impl TextToSpeech for OpenAIProvider {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(&self, text: &str) -> Result<Bytes, SpeechError> {
        debug!("Synthesizing speech with OpenAI TTS");

        let request = TtsRequest {
            model: &self.config.tts_model,
            input: text,
            voice: &self.config.tts_voice,
            response_format: &self.config.tts_format,
        };

        let response = self
            .client
            .post(self.tts_url())
            .bearer_auth(self.api_key())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Speech synthesis request failed");
            return Err(SpeechError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let audio = collect_chunks(response.bytes_stream()).await?;

        debug!(audio_size = audio.len(), "Speech synthesis complete");
        Ok(audio)
    }
}

#[async_trait]
impl SpeechToText for OpenAIProvider {
    #[instrument(skip(self, audio), fields(audio_size = audio.len(), file_name = %file_name))]
    async fn transcribe(&self, audio: Bytes, file_name: &str) -> Result<String, SpeechError> {
        debug!("Transcribing audio with OpenAI Whisper");

        let boundary = Uuid::new_v4().to_string();
        let form = MultipartBody::new(boundary)
            .file("file", file_name, "audio/mpeg", audio)
            .text("model", &self.config.stt_model)
            .text("response_format", "text");

        let response = self
            .client
            .post(self.stt_url())
            .bearer_auth(self.api_key())
            .header(reqwest::header::CONTENT_TYPE, form.content_type_header())
            .body(form.encode())
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status, body = %body, "Transcription request failed");
            return Err(SpeechError::Status { code: status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Network(e.to_string()))?;

        let text =
            String::from_utf8(bytes.to_vec()).map_err(|e| SpeechError::Decode(e.to_string()))?;

        debug!(text_len = text.len(), "Transcription complete");
        Ok(text)
    }
}
