use crate::types::{Message, MessageRole};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Ordered, append-only record of one conversation.
///
/// Invariant: roles alternate user/assistant in append order, so after N
/// completed turns the transcript holds exactly 2N messages starting with a
/// user message. The turn orchestration maintains this by rolling back the
/// pending user message when a turn fails.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Drop the trailing user message of a failed turn, if present.
    pub fn discard_pending_turn(&mut self) {
        if self
            .messages
            .last()
            .is_some_and(|m| m.role == MessageRole::User)
        {
            self.messages.pop();
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of completed user/assistant exchanges.
    pub fn completed_turns(&self) -> usize {
        self.messages.len() / 2
    }
}

/// In-memory map of session id to transcript.
///
/// Each transcript sits behind its own async mutex so turns within one
/// session are serialized (a submission blocks until the pipeline finishes)
/// while independent sessions proceed without contention.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<tokio::sync::Mutex<Transcript>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&self, session_id: &str) -> Arc<tokio::sync::Mutex<Transcript>> {
        let mut sessions = self.sessions.write();
        sessions
            .entry(session_id.to_string())
            .or_default()
            .clone()
    }

    pub fn get(&self, session_id: &str) -> Option<Arc<tokio::sync::Mutex<Transcript>>> {
        self.sessions.read().get(session_id).cloned()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }
}
