//! Mock implementations for testing.
//!
//! Mock embedder, index, and chat model that record every call, so tests can
//! assert call counts, arguments, and stage ordering without touching any
//! hosted service. A shared [`CallLog`] threaded through all three mocks
//! captures the sequence of pipeline stages.

use async_trait::async_trait;
use kara::db::VectorIndex;
use kara::llm::ChatModel;
use kara::rag::Embedder;
use kara::types::{AppError, Result, RetrievalMatch};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Shared, ordered record of which pipeline stages ran.
pub type CallLog = Arc<Mutex<Vec<&'static str>>>;

pub fn new_call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

// ============= Mock Embedder =============

pub struct MockEmbedder {
    vector: Vec<f32>,
    should_fail: bool,
    pub calls: AtomicUsize,
    pub inputs: Mutex<Vec<String>>,
    log: Option<CallLog>,
}

impl MockEmbedder {
    /// Embedder that returns the given vector for every input.
    pub fn returning(vector: Vec<f32>) -> Self {
        Self {
            vector,
            should_fail: false,
            calls: AtomicUsize::new(0),
            inputs: Mutex::new(Vec::new()),
            log: None,
        }
    }

    /// Embedder that always fails with a remote-service error.
    pub fn failing() -> Self {
        Self {
            vector: Vec::new(),
            should_fail: true,
            calls: AtomicUsize::new(0),
            inputs: Mutex::new(Vec::new()),
            log: None,
        }
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(log) = &self.log {
            log.lock().unwrap().push("embed");
        }
        if self.should_fail {
            return Err(AppError::Embedding("Mock embedding failure".to_string()));
        }
        self.inputs.lock().unwrap().push(text.to_string());
        Ok(self.vector.clone())
    }

    fn model_name(&self) -> &str {
        "mock-embedding-model"
    }
}

// ============= Mock Vector Index =============

pub struct MockIndex {
    matches: Vec<RetrievalMatch>,
    should_fail: bool,
    pub calls: AtomicUsize,
    pub queries: Mutex<Vec<(Vec<f32>, usize)>>,
    log: Option<CallLog>,
}

impl MockIndex {
    /// Index that returns the given matches for every query.
    pub fn returning(matches: Vec<RetrievalMatch>) -> Self {
        Self {
            matches,
            should_fail: false,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            log: None,
        }
    }

    /// Index with no stored vectors: every query yields zero matches.
    pub fn empty() -> Self {
        Self::returning(Vec::new())
    }

    /// Index that always fails with a remote-service error.
    pub fn failing() -> Self {
        Self {
            matches: Vec::new(),
            should_fail: true,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            log: None,
        }
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VectorIndex for MockIndex {
    fn provider_name(&self) -> &'static str {
        "mock"
    }

    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<RetrievalMatch>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(log) = &self.log {
            log.lock().unwrap().push("query");
        }
        if self.should_fail {
            return Err(AppError::Index("Mock index failure".to_string()));
        }
        self.queries.lock().unwrap().push((vector.to_vec(), top_k));
        Ok(self.matches.clone())
    }
}

// ============= Mock Chat Model =============

pub struct MockChatModel {
    response: String,
    should_fail: bool,
    pub calls: AtomicUsize,
    pub requests: Mutex<Vec<(String, String)>>,
    log: Option<CallLog>,
}

impl MockChatModel {
    /// Chat model that returns the given answer for every request.
    pub fn returning(response: &str) -> Self {
        Self {
            response: response.to_string(),
            should_fail: false,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            log: None,
        }
    }

    /// Chat model that always fails with a remote-service error.
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            should_fail: true,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            log: None,
        }
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The (system, prompt) pairs this mock received, in order.
    pub fn recorded_requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(log) = &self.log {
            log.lock().unwrap().push("generate");
        }
        if self.should_fail {
            return Err(AppError::Generation("Mock generation failure".to_string()));
        }
        self.requests
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        "mock-chat-model"
    }
}

// ============= Helpers =============

pub fn retrieval_match(id: &str, text: &str, score: f32) -> RetrievalMatch {
    RetrievalMatch {
        id: id.to_string(),
        text: text.to_string(),
        score,
    }
}
