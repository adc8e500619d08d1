use anyhow::{anyhow, Result};
use catalog_client::{CatalogQuery, DEFAULT_ENDPOINT, DEFAULT_QUERY, DEFAULT_TIMEOUT_SECS, MAX_RESULTS_LIMIT};
use clap::Parser;
use colored::Colorize;
use orchestrator::{
    BookOrchestrator, OrchestratorConfig, PipelineError, RunSummary, DEFAULT_OUTPUT, DEFAULT_TOP_N,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Book Scout - fetch, filter and rank catalog books
#[derive(Parser, Debug)]
#[command(name = "book-scout")]
#[command(about = "Fetch books from a public catalog, keep the well-rated recent ones, and export them to CSV", long_about = None)]
struct Cli {
    /// Keyword to search the catalog for
    #[arg(short, long, env = "BOOK_SCOUT_QUERY", default_value = DEFAULT_QUERY)]
    query: String,

    /// Number of catalog results to fetch (1-40)
    #[arg(long, env = "BOOK_SCOUT_MAX_RESULTS", default_value_t = MAX_RESULTS_LIMIT)]
    max_results: u32,

    /// Catalog search endpoint
    #[arg(long, env = "BOOK_SCOUT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// CSV file to write the ranked books to
    #[arg(short, long, env = "BOOK_SCOUT_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Number of books to print in the console report
    #[arg(long, env = "BOOK_SCOUT_TOP", default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Give up on the catalog request after this many seconds
    #[arg(long, env = "BOOK_SCOUT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> OrchestratorConfig {
        OrchestratorConfig {
            endpoint: self.endpoint,
            query: CatalogQuery::new(self.query).with_max_results(self.max_results),
            timeout: Duration::from_secs(self.timeout_secs),
            top_n: self.top,
            output_path: self.output,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(cli.verbose) {
        eprintln!("{}: {err:#}", "Error".red().bold());
        return ExitCode::FAILURE;
    }

    match run(cli.into_config()).await {
        Ok(summary) => {
            println!(
                "Fetched {} items, {} passed filters",
                summary.fetched, summary.kept
            );
            println!(
                "{} Data saved to {} successfully.",
                "✓".green(),
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Run failed: {}", err);
            eprintln!("{}: {}", err.category().red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing on stderr so stdout only carries the report
fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

/// Run the whole pipeline, printing the report to stdout
async fn run(config: OrchestratorConfig) -> Result<RunSummary, PipelineError> {
    tracing::info!(
        "Searching '{}' at {}",
        config.query.keyword(),
        config.endpoint
    );
    let orchestrator = BookOrchestrator::new(config)?;
    let mut stdout = io::stdout().lock();
    orchestrator.run(&mut stdout).await
}
