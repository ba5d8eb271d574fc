use crate::types::Result;
use async_trait::async_trait;

/// Generic chat-completion client.
///
/// The pipeline builds a two-message prompt (fixed system instruction plus a
/// user message) and hands it to this trait. Implementations call the hosted
/// model and return the generated text verbatim; output is not validated or
/// post-processed.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate a completion for a system instruction and a user prompt.
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String>;

    /// Get the model name/identifier.
    fn model_name(&self) -> &str;
}

/// Sampling parameters applied to every generation request.
#[derive(Debug, Clone, Copy)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1000,
        }
    }
}
