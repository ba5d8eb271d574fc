//! Pinecone vector index client.
//!
//! Talks to the data plane of a single, pre-populated Pinecone index:
//! `POST {index_host}/query` with the query vector, requesting metadata.
//! There is no upsert or index management; the index is maintained
//! externally and this client only reads from it.

use crate::db::index::VectorIndex;
use crate::types::{AppError, RetrievalMatch, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for one Pinecone index, addressed by its data-plane host.
pub struct PineconeIndex {
    http: reqwest::Client,
    host: String,
    api_key: String,
    index_name: String,
}

impl PineconeIndex {
    /// Create a client for the index served at `index_host`.
    ///
    /// `request_timeout` bounds every query; there is no retry, a timeout
    /// surfaces as [`AppError::Index`].
    pub fn new(
        index_host: String,
        api_key: String,
        index_name: String,
        request_timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| AppError::Index(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            host: index_host.trim_end_matches('/').to_string(),
            api_key,
            index_name,
        })
    }

    /// Name of the index this client queries.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    vector: &'a [f32],
    #[serde(rename = "topK")]
    top_k: usize,
    #[serde(rename = "includeMetadata")]
    include_metadata: bool,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[derive(Deserialize)]
struct QueryMatch {
    id: String,
    #[serde(default)]
    score: f32,
    #[serde(default)]
    metadata: Option<serde_json::Value>,
}

impl QueryMatch {
    fn into_retrieval_match(self) -> RetrievalMatch {
        let text = self
            .metadata
            .as_ref()
            .and_then(|m| m.get("text"))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        RetrievalMatch {
            id: self.id,
            text,
            score: self.score,
        }
    }
}

#[async_trait]
impl VectorIndex for PineconeIndex {
    fn provider_name(&self) -> &'static str {
        "pinecone"
    }

    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<RetrievalMatch>> {
        let request = QueryRequest {
            vector,
            top_k,
            include_metadata: true,
        };

        let response = self
            .http
            .post(format!("{}/query", self.host))
            .header("Api-Key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Index(format!("Pinecone query failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Index(format!(
                "Pinecone returned {}: {}",
                status, body
            )));
        }

        let parsed: QueryResponse = response
            .json()
            .await
            .map_err(|e| AppError::Index(format!("Malformed Pinecone response: {}", e)))?;

        tracing::debug!(
            index = %self.index_name,
            matches = parsed.matches.len(),
            "vector index query complete"
        );

        Ok(parsed
            .matches
            .into_iter()
            .map(QueryMatch::into_retrieval_match)
            .collect())
    }
}
