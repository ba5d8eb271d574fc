//! Vector index abstraction.
//!
//! The index is pre-populated externally; this application issues
//! nearest-neighbor queries and reads the `text` metadata of each match.
//! Zero matches is a valid result, not an error.

use crate::types::{RetrievalMatch, Result};
use async_trait::async_trait;

/// Abstract read-only interface to a vector index.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Get the name of this index provider.
    fn provider_name(&self) -> &'static str;

    /// Query for the `top_k` nearest stored vectors, with metadata.
    ///
    /// Matches come back in the order the index returns them (typically
    /// descending similarity; ties are broken by the service). An empty
    /// vector of matches is a valid, non-error result.
    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<RetrievalMatch>>;
}

// ============================================================================
// In-Memory Index (for testing)
// ============================================================================

use parking_lot::RwLock;

/// In-memory vector index for testing purposes.
///
/// Holds (id, vector, text) entries and ranks them by cosine similarity.
/// Nothing is persisted.
#[derive(Default)]
pub struct InMemoryIndex {
    entries: RwLock<Vec<IndexEntry>>,
}

struct IndexEntry {
    id: String,
    vector: Vec<f32>,
    text: String,
}

impl InMemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Test setup only; the production index is read-only.
    pub fn insert(&self, id: impl Into<String>, vector: Vec<f32>, text: impl Into<String>) {
        self.entries.write().push(IndexEntry {
            id: id.into(),
            vector,
            text: text.into(),
        });
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() {
            return 0.0;
        }

        let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot_product / (norm_a * norm_b)
    }
}

#[async_trait]
impl VectorIndex for InMemoryIndex {
    fn provider_name(&self) -> &'static str {
        "in-memory"
    }

    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<RetrievalMatch>> {
        let entries = self.entries.read();
        let mut matches: Vec<RetrievalMatch> = entries
            .iter()
            .map(|entry| RetrievalMatch {
                id: entry.id.clone(),
                text: entry.text.clone(),
                score: Self::cosine_similarity(vector, &entry.vector),
            })
            .collect();

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(top_k);
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn query_ranks_by_cosine_similarity() {
        let index = InMemoryIndex::new();
        index.insert("a", vec![1.0, 0.0], "aligned");
        index.insert("b", vec![0.0, 1.0], "orthogonal");
        index.insert("c", vec![0.7, 0.7], "diagonal");

        let matches = index.query(&[1.0, 0.0], 2).await.unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, "a");
        assert_eq!(matches[1].id, "c");
        assert!(matches[0].score > matches[1].score);
    }

    #[tokio::test]
    async fn query_on_empty_index_returns_no_matches() {
        let index = InMemoryIndex::new();
        let matches = index.query(&[1.0, 0.0], 3).await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn mismatched_dimensions_score_zero() {
        let index = InMemoryIndex::new();
        index.insert("a", vec![1.0, 0.0, 0.0], "three dims");

        let matches = index.query(&[1.0, 0.0], 1).await.unwrap();
        assert_eq!(matches[0].score, 0.0);
    }
}
