use serde::{Deserialize, Serialize};

/// One chunk as persisted by the indexing tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredChunk {
    pub id: String,
    pub vector: Vec<f32>,
    pub text: String,
    pub source: Option<String>,
}

/// A retrieved chunk paired with its relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: StoredChunk,
    pub score: f32,
}

/// Result of a single query. The relevance gate is decided where retrieval
/// happens, so callers only render the outcome.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    NoMatch,
    Answered {
        response: String,
        sources: Vec<Option<String>>,
    },
}
