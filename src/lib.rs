//! # K.A.R.A - Knowledge-Augmented Retrieval Assistant
//!
//! A Gujarati tax-law question-answering assistant built on a three-stage
//! retrieval-augmented generation pipeline: the question is embedded via a
//! hosted embedding model, the nearest tax-law passages are fetched from a
//! managed vector index, and a hosted chat model synthesizes an answer -
//! always in Gujarati, whatever language the question arrived in.
//!
//! ## Overview
//!
//! K.A.R.A can be used in two ways:
//!
//! 1. **As a binary** - `kara-server chat` for an interactive terminal
//!    session, `kara-server serve` for the HTTP API
//! 2. **As a library** - Import the pipeline into your own Rust project
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use kara::{AnswerPipeline, Config, build_pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let pipeline = build_pipeline(&config)?;
//!
//!     let answer = pipeline.answer("What is the filing deadline?").await?;
//!     println!("{}", answer.text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`rag`] - The embed/retrieve/generate pipeline
//! - [`db`] - Vector index clients (Pinecone, in-memory)
//! - [`llm`] - Chat-completion clients
//! - [`memory`] - Transcripts and session storage
//! - [`api`] - REST API handlers and routes
//! - [`cli`] - Terminal interface
//! - [`types`] - Common types and error handling
//!
//! ## Architecture
//!
//! Every external dependency sits behind a trait ([`rag::Embedder`],
//! [`db::VectorIndex`], [`llm::ChatModel`]) injected at construction, so the
//! pipeline itself is stateless and fully mockable. Per turn, the three
//! stages run strictly in sequence; a failure in any stage aborts the turn
//! before the next stage starts.

#![warn(missing_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Command-line interface and interactive chat.
pub mod cli;
/// Vector index clients.
pub mod db;
/// Chat-completion clients.
pub mod llm;
/// Transcripts and session storage.
pub mod memory;
/// The retrieval-augmented generation pipeline.
pub mod rag;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use db::{InMemoryIndex, PineconeIndex, VectorIndex};
pub use llm::{ChatModel, GenerationOptions, OpenAIChatModel};
pub use memory::{SessionStore, Transcript};
pub use rag::{AnswerPipeline, Embedder, OpenAIEmbedder};
pub use types::{Answer, AppError, Result, RetrievalMatch};
pub use utils::config::Config;

use std::sync::Arc;
use std::time::Duration;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Environment-driven configuration
    pub config: Arc<Config>,
    /// The answer pipeline
    pub pipeline: Arc<AnswerPipeline>,
    /// In-memory session transcripts
    pub sessions: Arc<SessionStore>,
}

/// Wire the production pipeline from configuration: OpenAI embedder and chat
/// model, Pinecone index.
pub fn build_pipeline(config: &Config) -> Result<AnswerPipeline> {
    let embedder = OpenAIEmbedder::new(
        config.openai.api_key.clone(),
        config.openai.api_base.clone(),
        config.openai.embedding_model.clone(),
    );

    let index = PineconeIndex::new(
        config.pinecone.index_host.clone(),
        config.pinecone.api_key.clone(),
        config.pinecone.index_name.clone(),
        Duration::from_secs(config.pinecone.request_timeout_secs),
    )?;

    let chat_model = OpenAIChatModel::new(
        config.openai.api_key.clone(),
        config.openai.api_base.clone(),
        config.openai.chat_model.clone(),
        GenerationOptions {
            temperature: config.generation.temperature,
            max_tokens: config.generation.max_tokens,
        },
    );

    Ok(AnswerPipeline::new(
        Arc::new(embedder),
        Arc::new(index),
        Arc::new(chat_model),
        config.retrieval.top_k,
    ))
}
