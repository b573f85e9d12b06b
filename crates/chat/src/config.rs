//! Configuration for the chat completion client

use serde::{Deserialize, Serialize};

/// Configuration for the chat completion client
#[derive(Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// API key for the chat provider
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the chat API (for custom endpoints)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model to request completions from
    #[serde(default = "default_model")]
    pub model: String,

    /// Persona prepended to every conversation as an assistant message;
    /// skipped when empty
    #[serde(default = "default_persona")]
    pub persona: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl std::fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("persona", &self.persona)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_persona() -> String {
    "You are a helpful assistant.".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            persona: default_persona(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ChatConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Base URL must not be empty".to_string());
        }

        if self.model.is_empty() {
            return Err("Model must not be empty".to_string());
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
