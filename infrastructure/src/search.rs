use domain::models::{ScoredChunk, StoredChunk};

pub struct SearchEngine;

impl SearchEngine {
    pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot_product / (norm_a * norm_b)
    }

    /// Ranks every stored chunk against the query embedding and keeps the
    /// top `top_k`, highest score first. Scores ride along with the chunks
    /// so callers can apply a relevance cutoff.
    pub fn top_matches(
        query_embedding: &[f32],
        chunks: &[StoredChunk],
        top_k: usize,
    ) -> Vec<ScoredChunk> {
        let mut scored: Vec<ScoredChunk> = chunks
            .iter()
            .map(|chunk| ScoredChunk {
                score: Self::cosine_similarity(query_embedding, &chunk.vector),
                chunk: chunk.clone(),
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(top_k);
        scored
    }
}
