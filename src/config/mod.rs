#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_url, validate_url_list, Validate,
};
use toml_config::TomlConfig;

/// Word lists merged when no other sources are configured, in reporting order.
pub const DEFAULT_SOURCES: &[&str] = &[
    "https://raw.githubusercontent.com/jeremy-rifkin/Wordlist/master/master.txt",
    "https://raw.githubusercontent.com/mwdean/english-wordz/master/words_alpha.txt",
];

pub const DEFAULT_VALIDATOR_ENDPOINT: &str =
    "https://d3hgrnpazz7n9u.cloudfront.net/allowedWords";

pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub output_path: String,
    pub chunk_size: usize,
    pub sources: Vec<String>,
    pub validator_endpoint: String,
}

impl RunConfig {
    pub fn new(output_path: impl Into<String>) -> Self {
        Self {
            output_path: output_path.into(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            validator_endpoint: DEFAULT_VALIDATOR_ENDPOINT.to_string(),
        }
    }

    /// Command-line values win over the file, the file wins over defaults.
    pub fn resolve(
        output_path: impl Into<String>,
        chunk_size: Option<usize>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let mut config = Self::new(output_path);

        if let Some(file) = file {
            if let Some(urls) = file.source_urls() {
                config.sources = urls.to_vec();
            }
            if let Some(endpoint) = file.validator_endpoint() {
                config.validator_endpoint = endpoint.to_string();
            }
            if let Some(chunk) = file.chunk_size() {
                config.chunk_size = chunk;
            }
        }

        if let Some(chunk) = chunk_size {
            config.chunk_size = chunk;
        }

        config
    }
}

impl ConfigProvider for RunConfig {
    fn sources(&self) -> &[String] {
        &self.sources
    }

    fn validator_endpoint(&self) -> &str {
        &self.validator_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output", &self.output_path)?;
        validate_positive_number("chunk", self.chunk_size, 1)?;
        validate_url_list("sources", &self.sources)?;
        validate_url("validator_endpoint", &self.validator_endpoint)?;
        Ok(())
    }
}
