use crate::llm::client::{ChatModel, GenerationOptions};
use crate::types::{AppError, Result};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;

pub struct OpenAIChatModel {
    client: Client<OpenAIConfig>,
    model: String,
    options: GenerationOptions,
}

impl OpenAIChatModel {
    pub fn new(api_key: String, api_base: String, model: String, options: GenerationOptions) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);

        Self {
            client: Client::with_config(config),
            model,
            options,
        }
    }
}

#[async_trait]
impl ChatModel for OpenAIChatModel {
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![
                ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage::from(
                    system.to_string(),
                )),
                ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage::from(
                    prompt.to_string(),
                )),
            ])
            .temperature(self.options.temperature)
            .max_tokens(self.options.max_tokens)
            .build()
            .map_err(|e| AppError::Generation(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AppError::Generation(format!("OpenAI chat API error: {}", e)))?;

        tracing::debug!(model = %self.model, choices = response.choices.len(), "chat completion received");

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::Generation("Empty completion from OpenAI".to_string()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
