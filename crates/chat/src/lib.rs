//! Chat completion client for OpenAI-compatible APIs
//!
//! Prepends an optional configured persona to the prior history and the
//! new prompt, then extracts the first completion choice from the
//! provider's response.
//!
//! # Example
//!
//! ```ignore
//! use chat::{ChatClient, ChatConfig};
//!
//! let client = ChatClient::new(ChatConfig {
//!     api_key: Some("sk-...".to_string()),
//!     ..Default::default()
//! })?;
//! let reply = client.prompt("What is the capital of France?", &[]).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::ChatClient;
pub use config::ChatConfig;
pub use error::ChatError;
pub use types::{ChatMessage, MessageRole};
