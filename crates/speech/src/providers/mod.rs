//! Speech provider implementations
//!
//! Contains concrete implementations of the `TextToSpeech`,
//! `CallbackTextToSpeech`, and `SpeechToText` traits.

pub mod elevenlabs;
pub mod openai;

pub use elevenlabs::ElevenLabsProvider;
pub use openai::OpenAIProvider;
