//! Chat completion client implementation

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::ChatConfig;
use crate::error::ChatError;
use crate::types::ChatMessage;

/// Client for an OpenAI-compatible chat completions API
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    config: ChatConfig,
}

impl ChatClient {
    /// Create a new chat client
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Configuration` if the configuration is invalid
    /// or no API key is set.
    pub fn new(config: ChatConfig) -> Result<Self, ChatError> {
        config.validate().map_err(ChatError::Configuration)?;

        if config.api_key.is_none() {
            return Err(ChatError::Configuration(
                "Chat API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ChatError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    /// Build the chat completions endpoint URL
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Assemble the message list for a prompt turn
    ///
    /// The configured persona leads the conversation as an assistant
    /// message when non-empty, followed by prior history, with the new
    /// prompt last.
    fn build_messages(&self, prompt: &str, history: &[ChatMessage]) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(history.len() + 2);

        if !self.config.persona.is_empty() {
            messages.push(ChatMessage::assistant(self.config.persona.clone()));
        }
        messages.extend_from_slice(history);
        messages.push(ChatMessage::user(prompt));

        messages
    }

    /// Send one prompt turn with prior conversation history
    ///
    /// # Errors
    ///
    /// Returns `ChatError` when the request fails or the response carries
    /// no completion.
    #[instrument(skip(self, prompt, history), fields(history_len = history.len()))]
    pub async fn prompt(
        &self,
        prompt: &str,
        history: &[ChatMessage],
    ) -> Result<String, ChatError> {
        let messages = self.build_messages(prompt, history);
        self.complete(&messages).await
    }

    /// Request a completion for a fully assembled message list
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Status` on a non-success response,
    /// `ChatError::InvalidResponse` when the body is not the expected JSON,
    /// and `ChatError::EmptyResponse` when no choice carries content.
    #[instrument(skip(self, messages), fields(message_count = messages.len()))]
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatError> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages,
        };

        debug!("Sending chat completion request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Chat completion request failed");
            return Err(ChatError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ChatError::EmptyResponse)?;

        debug!(content_len = content.len(), "Chat completion received");

        Ok(content)
    }
}

/// OpenAI-format chat completion request
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

/// OpenAI-format chat completion response
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    // Absent for tool-call responses
    #[serde(default)]
    content: Option<String>,
}
