//! Configuration for speech providers

use serde::{Deserialize, Serialize};

/// Configuration shared by the speech providers and the dispatcher
#[derive(Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// OpenAI API key
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// OpenAI API base URL (for custom endpoints)
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    /// ElevenLabs API key
    #[serde(default)]
    pub elevenlabs_api_key: Option<String>,

    /// ElevenLabs API base URL (for custom endpoints)
    #[serde(default = "default_elevenlabs_base_url")]
    pub elevenlabs_base_url: String,

    /// Text-to-speech model for OpenAI
    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    /// Voice for OpenAI TTS
    #[serde(default = "default_tts_voice")]
    pub tts_voice: String,

    /// Output audio format for OpenAI TTS
    #[serde(default = "default_tts_format")]
    pub tts_format: String,

    /// Speech-to-text model
    #[serde(default = "default_stt_model")]
    pub stt_model: String,

    /// Synthesis model for ElevenLabs
    #[serde(default = "default_elevenlabs_model")]
    pub elevenlabs_model: String,

    /// ElevenLabs voice stability (0.0 to 1.0)
    #[serde(default = "default_stability")]
    pub stability: f32,

    /// ElevenLabs similarity boost (0.0 to 1.0)
    #[serde(default = "default_similarity_boost")]
    pub similarity_boost: f32,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl std::fmt::Debug for SpeechConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechConfig")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("openai_base_url", &self.openai_base_url)
            .field(
                "elevenlabs_api_key",
                &self.elevenlabs_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("elevenlabs_base_url", &self.elevenlabs_base_url)
            .field("tts_model", &self.tts_model)
            .field("tts_voice", &self.tts_voice)
            .field("tts_format", &self.tts_format)
            .field("stt_model", &self.stt_model)
            .field("elevenlabs_model", &self.elevenlabs_model)
            .field("stability", &self.stability)
            .field("similarity_boost", &self.similarity_boost)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_elevenlabs_base_url() -> String {
    "https://api.elevenlabs.io/v1".to_string()
}

fn default_tts_model() -> String {
    "tts-1".to_string()
}

fn default_tts_voice() -> String {
    "alloy".to_string()
}

fn default_tts_format() -> String {
    "aac".to_string()
}

fn default_stt_model() -> String {
    "whisper-1".to_string()
}

fn default_elevenlabs_model() -> String {
    "eleven_multilingual_v2".to_string()
}

const fn default_stability() -> f32 {
    0.75
}

const fn default_similarity_boost() -> f32 {
    0.75
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: default_openai_base_url(),
            elevenlabs_api_key: None,
            elevenlabs_base_url: default_elevenlabs_base_url(),
            tts_model: default_tts_model(),
            tts_voice: default_tts_voice(),
            tts_format: default_tts_format(),
            stt_model: default_stt_model(),
            elevenlabs_model: default_elevenlabs_model(),
            stability: default_stability(),
            similarity_boost: default_similarity_boost(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SpeechConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            openai_api_key: Some("test-key".to_string()),
            elevenlabs_api_key: Some("test-eleven-key".to_string()),
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.openai_base_url.is_empty() {
            return Err("OpenAI base URL must not be empty".to_string());
        }

        if self.elevenlabs_base_url.is_empty() {
            return Err("ElevenLabs base URL must not be empty".to_string());
        }

        if !(0.0..=1.0).contains(&self.stability) {
            return Err(format!(
                "Stability must be between 0.0 and 1.0, got {}",
                self.stability
            ));
        }

        if !(0.0..=1.0).contains(&self.similarity_boost) {
            return Err(format!(
                "Similarity boost must be between 0.0 and 1.0, got {}",
                self.similarity_boost
            ));
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
