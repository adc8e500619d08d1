//! Orchestrator crate for the book scout pipeline.
//!
//! This crate contains the orchestrator that coordinates all stages of the
//! pipeline, the console report, and the top-level error type.

pub mod error;
pub mod orchestrator;
pub mod report;

pub use error::PipelineError;
pub use orchestrator::{BookOrchestrator, OrchestratorConfig, RankedBatch, RunSummary, DEFAULT_OUTPUT};
pub use report::DEFAULT_TOP_N;
