//! Port definitions for speech providers
//!
//! Defines the traits (ports) that speech provider adapters must implement.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::SpeechError;

/// Result callback for callback-based synthesis providers
///
/// Contract: invoked exactly once per request, on whatever task the
/// transport completes on. The bridge in the dispatcher guards against
/// providers that violate this.
pub type SynthesisCallback = Box<dyn Fn(Result<Bytes, SpeechError>) + Send>;

/// Port for awaitable Text-to-Speech implementations
///
/// # Example
///
/// ```ignore
/// use speech::{TextToSpeech, SpeechError};
///
/// async fn voice_reply(tts: &impl TextToSpeech, text: &str) -> Result<Vec<u8>, SpeechError> {
///     let audio = tts.synthesize(text).await?;
///     Ok(audio.to_vec())
/// }
/// ```
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails.
    async fn synthesize(&self, text: &str) -> Result<Bytes, SpeechError>;
}

/// Port for callback-based Text-to-Speech implementations
///
/// The call returns immediately; the outcome is reported through
/// `on_result` once the underlying request settles.
pub trait CallbackTextToSpeech: Send + Sync {
    /// Synthesize speech for `text` with the given voice, reporting the
    /// outcome through `on_result`
    fn generate_speech(&self, text: &str, voice_id: &str, on_result: SynthesisCallback);
}

/// Port for Speech-to-Text implementations
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text
    ///
    /// # Arguments
    ///
    /// * `audio` - Raw audio bytes to transcribe
    /// * `file_name` - File name reported to the provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if transcription fails.
    async fn transcribe(&self, audio: Bytes, file_name: &str) -> Result<String, SpeechError>;
}
