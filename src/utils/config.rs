//! Environment-driven configuration.
//!
//! All knobs the pipeline depends on are explicit here rather than buried in
//! call sites: sampling parameters, retrieval depth, model identifiers, and
//! the HTTP timeout applied to every remote call. Credentials come from the
//! environment (or a `.env` file via dotenvy) and are never logged.

use crate::types::{AppError, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub openai: OpenAIConfig,
    pub pinecone: PineconeConfig,
    pub retrieval: RetrievalConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub api_base: String,
    pub embedding_model: String,
    pub chat_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PineconeConfig {
    pub api_key: String,
    /// Data-plane host of the index, e.g. `https://gujtaxlaw-xxxx.svc.us-east-1.pinecone.io`.
    pub index_host: String,
    pub index_name: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalConfig {
    pub top_k: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: parse_var("PORT", 3000)?,
            },
            openai: OpenAIConfig {
                api_key: required_var("OPENAI_API_KEY")?,
                api_base: env::var("OPENAI_API_BASE")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                embedding_model: env::var("EMBEDDING_MODEL")
                    .unwrap_or_else(|_| "text-embedding-ada-002".to_string()),
                chat_model: env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),
            },
            pinecone: PineconeConfig {
                api_key: required_var("PINECONE_API_KEY")?,
                index_host: required_var("PINECONE_INDEX_HOST")?,
                index_name: env::var("PINECONE_INDEX").unwrap_or_else(|_| "gujtaxlaw".to_string()),
                request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", 30)?,
            },
            retrieval: RetrievalConfig {
                top_k: parse_var("TOP_K", 3)?,
            },
            generation: GenerationConfig {
                temperature: parse_var("TEMPERATURE", 0.7)?,
                max_tokens: parse_var("MAX_TOKENS", 1000)?,
            },
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| {
        AppError::Configuration(format!("required environment variable {} is not set", name))
    })
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Configuration(format!("could not parse {}='{}'", name, raw))),
        Err(_) => Ok(default),
    }
}
