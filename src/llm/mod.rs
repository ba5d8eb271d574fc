//! Chat-completion client abstractions.
//!
//! The generation stage of the pipeline talks to a hosted chat-completion
//! model through the [`ChatModel`] trait, so tests can substitute a mock and
//! the rest of the application never sees provider-specific types.

/// Core chat model trait and sampling options.
pub mod client;
/// OpenAI chat-completion implementation.
pub mod openai;

pub use client::{ChatModel, GenerationOptions};
pub use openai::OpenAIChatModel;
