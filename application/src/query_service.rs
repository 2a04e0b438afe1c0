use domain::models::{QueryOutcome, ScoredChunk};
use infrastructure::{
    chunk_store::ChunkStore, config::Config, model_client::ModelClient, search::SearchEngine,
};
use shared::types::Result;

const PROMPT_TEMPLATE: &str = "Answer the question based only on the following context:

{context}

---

Answer the question based on the above context: {question}";

const CHUNK_DELIMITER: &str = "\n\n---\n\n";

pub struct QueryService {
    store: ChunkStore,
    client: ModelClient,
    config: Config,
}

impl QueryService {
    pub fn new(store: ChunkStore, client: ModelClient, config: Config) -> Self {
        Self {
            store,
            client,
            config,
        }
    }

    /// Runs one retrieval-augmented query. Retrieval must pass the
    /// relevance gate before any prompt is built or sent; a failed gate is
    /// a clean `NoMatch`, not an error.
    pub async fn answer(&self, question: &str) -> Result<QueryOutcome> {
        let query_embedding = self.client.embed(question).await?;
        let chunks = self.store.load_chunks()?;
        let matches = SearchEngine::top_matches(&query_embedding, &chunks, self.config.top_k);

        if !passes_relevance_gate(&matches, self.config.relevance_threshold) {
            return Ok(QueryOutcome::NoMatch);
        }

        let context = build_context(&matches);
        let prompt = build_prompt(&context, question);
        // Show the exact prompt sent to the model.
        println!("{}", prompt);

        let response = self.client.generate(&prompt).await?;
        let sources = matches.iter().map(|m| m.chunk.source.clone()).collect();
        Ok(QueryOutcome::Answered { response, sources })
    }
}

/// Only the best match is inspected: the gate fails when it scores
/// strictly below the threshold, or when nothing was retrieved at all.
pub fn passes_relevance_gate(matches: &[ScoredChunk], threshold: f32) -> bool {
    matches.first().is_some_and(|top| top.score >= threshold)
}

/// Joins retrieved chunk texts with the fixed delimiter, retrieval order
/// preserved.
pub fn build_context(matches: &[ScoredChunk]) -> String {
    matches
        .iter()
        .map(|m| m.chunk.text.as_str())
        .collect::<Vec<_>>()
        .join(CHUNK_DELIMITER)
}

pub fn build_prompt(context: &str, question: &str) -> String {
    PROMPT_TEMPLATE
        .replace("{context}", context)
        .replace("{question}", question)
}
