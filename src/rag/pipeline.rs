use crate::db::VectorIndex;
use crate::llm::ChatModel;
use crate::memory::Transcript;
use crate::rag::embedder::Embedder;
use crate::rag::prompt::{SYSTEM_PROMPT, build_user_prompt};
use crate::types::{Answer, AppError, Message, RetrievalMatch, Result};
use std::sync::Arc;

/// The three-stage answer pipeline: embed, retrieve, generate.
///
/// Stateless; every dependency is injected at construction so tests can
/// substitute mocks for the hosted services. Each stage is awaited to
/// completion before the next starts, and a failure aborts the turn - the
/// generator never runs on a failed embedding or retrieval.
pub struct AnswerPipeline {
    embedder: Arc<dyn Embedder>,
    index: Arc<dyn VectorIndex>,
    chat_model: Arc<dyn ChatModel>,
    top_k: usize,
}

impl AnswerPipeline {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        index: Arc<dyn VectorIndex>,
        chat_model: Arc<dyn ChatModel>,
        top_k: usize,
    ) -> Self {
        Self {
            embedder,
            index,
            chat_model,
            top_k,
        }
    }

    /// Answer a single query.
    ///
    /// Zero retrieved matches yields an empty context string and generation
    /// still runs; the model is expected to disclose uncertainty per its
    /// instructions.
    pub async fn answer(&self, query: &str) -> Result<Answer> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput("Query must not be empty".to_string()));
        }

        tracing::debug!(model = self.embedder.model_name(), "embedding query");
        let vector = self.embedder.embed(query).await?;

        let matches = self.index.query(&vector, self.top_k).await?;
        let context = join_context(&matches);
        tracing::debug!(
            provider = self.index.provider_name(),
            matches = matches.len(),
            context_chars = context.len(),
            "retrieved context"
        );

        let text = self
            .chat_model
            .generate_with_system(SYSTEM_PROMPT, &build_user_prompt(&context, query))
            .await?;
        tracing::info!(
            model = self.chat_model.model_name(),
            answer_chars = text.len(),
            "generated answer"
        );

        Ok(Answer { text, matches })
    }

    /// Run one conversation turn against a transcript.
    ///
    /// The user turn is appended before the pipeline runs and the assistant
    /// turn after it succeeds. On failure the pending user turn is rolled
    /// back, so the transcript only ever contains completed turns and the
    /// user/assistant alternation invariant holds.
    pub async fn chat_turn(&self, transcript: &mut Transcript, query: &str) -> Result<Answer> {
        transcript.push(Message::user(query));

        match self.answer(query).await {
            Ok(answer) => {
                transcript.push(Message::assistant(answer.text.clone()));
                Ok(answer)
            }
            Err(e) => {
                transcript.discard_pending_turn();
                Err(e)
            }
        }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }
}

/// Space-join the `text` of each match, in the order the index returned them.
pub(crate) fn join_context(matches: &[RetrievalMatch]) -> String {
    matches
        .iter()
        .map(|m| m.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
