//! Speech synthesis dispatch
//!
//! Routes a synthesis request to one of two providers and presents a
//! single awaitable interface over both. The secondary (ElevenLabs)
//! provider reports through a callback; the dispatcher bridges that
//! callback into the awaited result via a oneshot channel whose sender is
//! taken on first fire, so a misbehaving provider that fires twice cannot
//! settle the call a second time.
//!
//! Selection only: exactly one outbound call per invocation, no fallback
//! to the other provider on error, no retry, no caching.

use std::sync::Arc;

use bytes::Bytes;
use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::{debug, instrument};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::{CallbackTextToSpeech, TextToSpeech};
use crate::providers::elevenlabs::ElevenLabsProvider;
use crate::providers::openai::OpenAIProvider;
use crate::types::SpeechRequest;

/// Dispatches synthesis requests to the primary (OpenAI) or secondary
/// (ElevenLabs) provider
pub struct SpeechDispatcher {
    primary: Arc<dyn TextToSpeech>,
    secondary: Arc<dyn CallbackTextToSpeech>,
}

impl std::fmt::Debug for SpeechDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechDispatcher").finish_non_exhaustive()
    }
}

impl SpeechDispatcher {
    /// Create a dispatcher wiring both concrete providers from one config
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if either provider rejects the
    /// configuration.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        let primary = OpenAIProvider::new(config.clone())?;
        let secondary = ElevenLabsProvider::new(config)?;

        Ok(Self::from_providers(Arc::new(primary), Arc::new(secondary)))
    }

    /// Create a dispatcher over caller-supplied providers
    pub fn from_providers(
        primary: Arc<dyn TextToSpeech>,
        secondary: Arc<dyn CallbackTextToSpeech>,
    ) -> Self {
        Self { primary, secondary }
    }

    /// Synthesize speech for the request
    ///
    /// Routes to the secondary provider when the request prefers it and
    /// carries a voice identifier; otherwise routes to the primary
    /// provider. Provider errors surface unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::InvalidRequest` for empty text, otherwise
    /// whatever the selected provider reported.
    #[instrument(
        skip(self, request),
        fields(text_len = request.text.len(), prefer_secondary = request.prefer_secondary)
    )]
    pub async fn generate_speech(&self, request: SpeechRequest) -> Result<Bytes, SpeechError> {
        if request.text.is_empty() {
            return Err(SpeechError::InvalidRequest(
                "Text cannot be empty".to_string(),
            ));
        }

        match (request.prefer_secondary, &request.voice_id) {
            (true, Some(voice_id)) => {
                debug!("Routing synthesis to secondary provider");
                self.await_callback(&request.text, voice_id).await
            }
            _ => {
                debug!("Routing synthesis to primary provider");
                self.primary.synthesize(&request.text).await
            }
        }
    }

    /// Bridge the secondary provider's callback into a single awaited result
    ///
    /// The oneshot sender is parked behind a mutex and taken on first fire;
    /// later invocations find nothing to send on. Dropping the returned
    /// future abandons the result without aborting the in-flight request.
    async fn await_callback(&self, text: &str, voice_id: &str) -> Result<Bytes, SpeechError> {
        let (tx, rx) = oneshot::channel();
        let tx = Mutex::new(Some(tx));

        self.secondary.generate_speech(
            text,
            voice_id,
            Box::new(move |result| {
                if let Some(tx) = tx.lock().take() {
                    let _ = tx.send(result);
                }
            }),
        );

        rx.await.map_err(|_| {
            SpeechError::Network(
                "Speech provider dropped the request without reporting a result".to_string(),
            )
        })?
    }
}
