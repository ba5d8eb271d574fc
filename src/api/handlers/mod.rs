//! API request handlers.

/// Chat and transcript handlers.
pub mod chat;
/// Health and instructions handlers.
pub mod system;
