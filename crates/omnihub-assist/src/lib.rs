//! Generative assistant client for OmniHub
//!
//! Wraps the Gemini `generateContent` REST endpoint behind the
//! [`CompletionService`] trait so the UI layer can be tested against a
//! stub instead of the network.

pub mod client;
pub mod prompt;

pub use client::{reply_or_fallback, CompletionService, GeminiClient, EMPTY_REPLY, FALLBACK_REPLY};
pub use prompt::system_instruction;
