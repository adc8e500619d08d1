//! # Book Orchestrator
//!
//! This module coordinates the entire pipeline:
//! 1. Fetch one batch of raw items from the catalog
//! 2. Normalize them into book records
//! 3. Apply the inclusion filters
//! 4. Rank the survivors by average rating
//! 5. Print the top N to the console
//! 6. Export every ranked record to CSV

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::info;

use book_data::{export, normalize_all, BookDataError, BookRecord};
use catalog_client::{
    CatalogClient, CatalogQuery, DEFAULT_ENDPOINT, DEFAULT_QUERY, DEFAULT_TIMEOUT_SECS,
    MAX_RESULTS_LIMIT,
};
use pipeline::{rank_by_rating, FilterPipeline};

use crate::error::PipelineError;
use crate::report::{self, DEFAULT_TOP_N};

/// File written when no output path is configured
pub const DEFAULT_OUTPUT: &str = "books.csv";

/// Settings for one pipeline run.
///
/// `Default` reproduces the fixed search: keyword `python`, 40 results,
/// 30 second timeout, top 5 report, export to `books.csv`.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    pub endpoint: String,
    pub query: CatalogQuery,
    pub timeout: Duration,
    pub top_n: usize,
    pub output_path: PathBuf,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            query: CatalogQuery::new(DEFAULT_QUERY).with_max_results(MAX_RESULTS_LIMIT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            top_n: DEFAULT_TOP_N,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Records that survived filtering, best first.
#[derive(Debug, Clone)]
pub struct RankedBatch {
    /// Number of items the catalog returned
    pub fetched: usize,
    pub records: Vec<BookRecord>,
}

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub fetched: usize,
    pub kept: usize,
    pub output_path: PathBuf,
}

/// Main orchestrator that wires the pipeline stages together
pub struct BookOrchestrator {
    client: CatalogClient,
    filter_pipeline: FilterPipeline,
    config: OrchestratorConfig,
}

impl BookOrchestrator {
    /// Create an orchestrator using the standard filters.
    pub fn new(config: OrchestratorConfig) -> Result<Self, PipelineError> {
        Self::with_filters(config, FilterPipeline::standard())
    }

    /// Create an orchestrator with a custom filter pipeline.
    pub fn with_filters(
        config: OrchestratorConfig,
        filter_pipeline: FilterPipeline,
    ) -> Result<Self, PipelineError> {
        let client = CatalogClient::new(config.endpoint.clone(), config.timeout)?;
        Ok(Self {
            client,
            filter_pipeline,
            config,
        })
    }

    /// Run every stage: fetch, normalize, filter, rank, report, export.
    ///
    /// The report is written to `out`. Nothing is exported if the fetch
    /// fails.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary, PipelineError> {
        let start_time = Instant::now();

        let batch = self.collect().await?;

        report::write_top(out, &batch.records, self.config.top_n).map_err(|source| {
            BookDataError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            }
        })?;

        self.export(&batch.records)?;

        info!("Pipeline finished in {:.2?}", start_time.elapsed());
        Ok(RunSummary {
            fetched: batch.fetched,
            kept: batch.records.len(),
            output_path: self.config.output_path.clone(),
        })
    }

    /// Fetch, normalize, filter and rank one batch.
    pub async fn collect(&self) -> Result<RankedBatch, PipelineError> {
        let items = self.client.fetch(&self.config.query).await?;
        let fetched = items.len();

        let records = normalize_all(&items);
        let records = self.filter_and_rank(records);
        info!(
            "{} of {} fetched items passed the filters",
            records.len(),
            fetched
        );

        Ok(RankedBatch { fetched, records })
    }

    /// Apply the filter pipeline, then rank what is left.
    pub fn filter_and_rank(&self, records: Vec<BookRecord>) -> Vec<BookRecord> {
        info!("Applying filters to {} records", records.len());
        let filtered = self.filter_pipeline.apply(records);
        rank_by_rating(filtered)
    }

    /// Write `records` to the configured output file.
    pub fn export(&self, records: &[BookRecord]) -> Result<(), PipelineError> {
        export::write_csv(&self.config.output_path, records)?;
        Ok(())
    }
}
