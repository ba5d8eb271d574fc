//! Retrieval Augmented Generation pipeline.
//!
//! The core of the application: a strictly sequential, three-stage pipeline
//! per user turn.
//!
//! 1. **Embed** - [`rag::embedder`](crate::rag::embedder) turns the query
//!    into a fixed-size vector via the hosted embedding model.
//! 2. **Retrieve** - the [`VectorIndex`](crate::db::VectorIndex) returns the
//!    top-k nearest passages; their texts are space-joined into one context
//!    string.
//! 3. **Generate** - [`rag::prompt`](crate::rag::prompt) builds the fixed
//!    Gujarati-output instruction plus a user message carrying context and
//!    question, and the [`ChatModel`](crate::llm::ChatModel) produces the
//!    answer.
//!
//! A failure in any stage aborts the turn; later stages never run. Zero
//! retrieved matches is not a failure - generation proceeds with an empty
//! context.

pub mod embedder;
pub mod pipeline;
pub mod prompt;

pub use embedder::{Embedder, OpenAIEmbedder};
pub use pipeline::AnswerPipeline;
