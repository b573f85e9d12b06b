//! Speech - synthesis dispatch and audio transcription
//!
//! Provides speech processing over two cloud providers:
//! - `SpeechDispatcher` - routes synthesis to OpenAI or ElevenLabs per request
//! - `SpeechToText` - transcribe audio to text (OpenAI Whisper)
//! - `MultipartBody` - byte-exact multipart/form-data encoding for uploads
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//! - `dispatcher` selects a provider and bridges the callback-based
//!   ElevenLabs API into a single awaited result
//!
//! # Example
//!
//! ```ignore
//! use speech::{SpeechConfig, SpeechDispatcher, SpeechRequest};
//!
//! let dispatcher = SpeechDispatcher::new(config)?;
//!
//! // Synthesize with the primary provider
//! let audio = dispatcher.generate_speech(SpeechRequest::new("Hello!")).await?;
//!
//! // Synthesize with the secondary provider and a specific voice
//! let request = SpeechRequest::new("Hello!")
//!     .with_voice("voice-id")
//!     .preferring_secondary();
//! let audio = dispatcher.generate_speech(request).await?;
//! ```

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod multipart;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use dispatcher::SpeechDispatcher;
pub use error::SpeechError;
pub use multipart::{MultipartBody, MultipartField};
pub use ports::{CallbackTextToSpeech, SpeechToText, SynthesisCallback, TextToSpeech};
pub use providers::elevenlabs::ElevenLabsProvider;
pub use providers::openai::{DEFAULT_RECORDING_FILE_NAME, OpenAIProvider};
pub use types::SpeechRequest;
