use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
    pub api_key: String,
    pub embedding_model: String,
    pub chat_model: String,
    pub store_path: String,
    pub top_k: usize,
    pub relevance_threshold: f32,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        Self {
            api_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            embedding_model: env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| "text-embedding-3-small".to_string()),
            chat_model: env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            store_path: env::var("STORE_PATH").unwrap_or_else(|_| "chunks.db".to_string()),
            top_k: env::var("TOP_K").ok().and_then(|v| v.parse().ok()).unwrap_or(3),
            // Score scale is owned by the search side, so the cutoff stays
            // configurable rather than baked into the pipeline.
            relevance_threshold: env::var("RELEVANCE_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.7),
        }
    }
}
