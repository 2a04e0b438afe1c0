use application::query_service::QueryService;
use clap::Parser;
use colored::Colorize;
use domain::models::QueryOutcome;
use infrastructure::{chunk_store::ChunkStore, config::Config, model_client::ModelClient};
use shared::telemetry::Telemetry;
use shared::types::Result;

pub const NO_MATCH_MESSAGE: &str = "Unable to find matching results.";

/// Marker printed in place of a source identifier when a chunk carries no
/// source metadata.
const MISSING_SOURCE_MARKER: &str = "none";

#[derive(Parser)]
#[command(name = "askdocs")]
#[command(about = "Answer a question from an indexed document store")]
pub struct Cli {
    /// The query text.
    pub query_text: String,
}

pub struct CliApp;

impl CliApp {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, cli: Cli) -> Result<()> {
        let telemetry = Telemetry::new();
        let config = Config::load();
        let client = ModelClient::new(&config);
        let store = ChunkStore::open(&config.store_path)?;
        let service = QueryService::new(store, client, config);

        match service.answer(&cli.query_text).await? {
            QueryOutcome::NoMatch => println!("{}", NO_MATCH_MESSAGE),
            QueryOutcome::Answered { response, sources } => {
                println!("{} {}", "Response:".green(), response);
                println!("{} [{}]", "Sources:".green(), format_sources(&sources));
            }
        }
        telemetry.report("query");
        Ok(())
    }
}

/// Renders the source list in retrieval order; chunks without source
/// metadata keep their position as an explicit marker.
pub fn format_sources(sources: &[Option<String>]) -> String {
    sources
        .iter()
        .map(|s| s.as_deref().unwrap_or(MISSING_SOURCE_MARKER))
        .collect::<Vec<_>>()
        .join(", ")
}
