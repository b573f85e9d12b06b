//! Request types for speech synthesis

use serde::{Deserialize, Serialize};

/// A speech synthesis request
///
/// Provider selection is explicit per request: the secondary (ElevenLabs)
/// provider is used only when `prefer_secondary` is set and a voice
/// identifier is present. There is no ambient default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRequest {
    /// Text to synthesize
    pub text: String,
    /// Voice identifier for the secondary provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    /// Whether to favor the secondary provider
    #[serde(default)]
    pub prefer_secondary: bool,
}

impl SpeechRequest {
    /// Create a request routed to the primary provider
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_id: None,
            prefer_secondary: false,
        }
    }

    /// Set the voice identifier for the secondary provider
    pub fn with_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = Some(voice_id.into());
        self
    }

    /// Favor the secondary provider for this request
    pub const fn preferring_secondary(mut self) -> Self {
        self.prefer_secondary = true;
        self
    }
}
