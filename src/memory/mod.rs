//! Conversation transcripts and session storage.
//!
//! Transcripts are purely in-memory: they live for the lifetime of one
//! interactive session and are destroyed when the process exits. There is no
//! persistence and no cross-session sharing; concurrent sessions are isolated
//! by session id.

pub mod transcript;

pub use transcript::{SessionStore, Transcript};
