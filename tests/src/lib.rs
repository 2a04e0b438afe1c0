//! Cross-crate tests that exercise the query pipeline without touching the
//! network: store access, ranking plus the relevance gate, and CLI parsing.

#[cfg(test)]
mod store_tests {
    use infrastructure::chunk_store::ChunkStore;
    use rusqlite::{params, Connection};
    use std::path::Path;

    fn write_store(path: &Path, rows: &[(&str, Vec<f32>, &str, Option<&str>)]) {
        let conn = Connection::open(path).unwrap();
        conn.execute_batch(
            "CREATE TABLE chunks (
                id TEXT PRIMARY KEY,
                vector BLOB NOT NULL,
                text TEXT NOT NULL,
                source TEXT
            );",
        )
        .unwrap();
        for (id, vector, text, source) in rows {
            let vector_bytes = serde_json::to_vec(vector).unwrap();
            conn.execute(
                "INSERT INTO chunks (id, vector, text, source) VALUES (?, ?, ?, ?)",
                params![id, vector_bytes, text, source],
            )
            .unwrap();
        }
    }

    #[test]
    fn open_fails_on_missing_store() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.db");
        let result = ChunkStore::open(&missing);
        assert!(result.is_err());
        let message = format!("{:#}", result.err().unwrap());
        assert!(message.contains("failed to open chunk store"));
    }

    #[test]
    fn loads_chunks_with_vectors_and_sources_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chunks.db");
        write_store(
            &path,
            &[
                ("c1", vec![1.0, 0.0], "alpha text", Some("docs/alpha.md")),
                ("c2", vec![0.0, 1.0], "beta text", None),
            ],
        );

        let store = ChunkStore::open(&path).unwrap();
        let chunks = store.load_chunks().unwrap();
        assert_eq!(chunks.len(), 2);

        let c1 = chunks.iter().find(|c| c.id == "c1").unwrap();
        assert_eq!(c1.vector, vec![1.0, 0.0]);
        assert_eq!(c1.text, "alpha text");
        assert_eq!(c1.source.as_deref(), Some("docs/alpha.md"));

        let c2 = chunks.iter().find(|c| c.id == "c2").unwrap();
        assert_eq!(c2.source, None);
    }

    #[test]
    fn empty_store_loads_no_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chunks.db");
        write_store(&path, &[]);

        let store = ChunkStore::open(&path).unwrap();
        assert!(store.load_chunks().unwrap().is_empty());
    }
}

#[cfg(test)]
mod pipeline_tests {
    use application::query_service::{build_context, build_prompt, passes_relevance_gate};
    use domain::models::StoredChunk;
    use infrastructure::search::SearchEngine;

    fn chunk(id: &str, vector: Vec<f32>, text: &str, source: Option<&str>) -> StoredChunk {
        StoredChunk {
            id: id.to_string(),
            vector,
            text: text.to_string(),
            source: source.map(str::to_string),
        }
    }

    // Unit vector at the angle whose cosine against [1, 0] is `cos`.
    fn at_cosine(cos: f32) -> Vec<f32> {
        vec![cos, (1.0 - cos * cos).sqrt()]
    }

    #[test]
    fn ranked_context_feeds_prompt_in_score_order() {
        let query = [1.0, 0.0];
        let chunks = vec![
            chunk("b", at_cosine(0.8), "B", Some("b.md")),
            chunk("c", at_cosine(0.75), "C", None),
            chunk("a", at_cosine(0.9), "A", Some("a.md")),
        ];

        let matches = SearchEngine::top_matches(&query, &chunks, 3);
        assert!(passes_relevance_gate(&matches, 0.7));

        let context = build_context(&matches);
        assert_eq!(context, "A\n\n---\n\nB\n\n---\n\nC");

        let prompt = build_prompt(&context, "which chunk?");
        assert!(prompt.contains("A\n\n---\n\nB\n\n---\n\nC"));
        assert!(prompt.ends_with("which chunk?"));
    }

    #[test]
    fn low_scoring_store_fails_the_gate_before_any_prompt() {
        let query = [1.0, 0.0];
        let chunks = vec![
            chunk("x", at_cosine(0.65), "X", None),
            chunk("y", at_cosine(0.5), "Y", None),
        ];

        let matches = SearchEngine::top_matches(&query, &chunks, 3);
        assert_eq!(matches.len(), 2);
        assert!(!passes_relevance_gate(&matches, 0.7));
    }

    #[test]
    fn sources_follow_match_order_with_gaps_marked() {
        let query = [1.0, 0.0];
        let chunks = vec![
            chunk("a", at_cosine(0.9), "A", Some("a.md")),
            chunk("b", at_cosine(0.8), "B", None),
            chunk("c", at_cosine(0.75), "C", Some("c.md")),
        ];

        let matches = SearchEngine::top_matches(&query, &chunks, 3);
        let sources: Vec<Option<String>> =
            matches.iter().map(|m| m.chunk.source.clone()).collect();
        assert_eq!(
            presentation::cli::format_sources(&sources),
            "a.md, none, c.md"
        );
    }

    #[test]
    fn scored_chunks_expose_scores_for_the_gate() {
        let query = [1.0, 0.0];
        let chunks = vec![chunk("a", at_cosine(0.9), "A", None)];
        let matches = SearchEngine::top_matches(&query, &chunks, 3);
        assert!((matches[0].score - 0.9).abs() < 1e-4);
    }
}

#[cfg(test)]
mod cli_tests {
    use clap::Parser;
    use presentation::cli::Cli;

    #[test]
    fn missing_query_argument_is_a_usage_error() {
        let result = Cli::try_parse_from(["askdocs"]);
        assert!(result.is_err());
    }

    #[test]
    fn single_positional_argument_parses() {
        let cli = Cli::try_parse_from(["askdocs", "how does retrieval work?"]).unwrap();
        assert_eq!(cli.query_text, "how does retrieval work?");
    }

    #[test]
    fn extra_positional_arguments_are_rejected() {
        let result = Cli::try_parse_from(["askdocs", "one", "two"]);
        assert!(result.is_err());
    }
}
