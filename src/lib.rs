pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{HttpClient, OutputFile};
pub use crate::config::RunConfig;
pub use crate::core::{orchestrator::BatchOrchestrator, validator::Validator};
pub use crate::utils::error::{Result, WordListError};
pub use crate::utils::logger::TracingReporter;
