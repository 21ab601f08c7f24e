use crate::utils::error::{Result, WordListError};
use crate::utils::validation::{validate_positive_number, validate_url, validate_url_list, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every section may be left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub sources: Option<SourcesConfig>,
    pub validator: Option<ValidatorConfig>,
    pub batch: Option<BatchConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub chunk_size: usize,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| WordListError::ConfigError {
            message: format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WordListError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WordListError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn source_urls(&self) -> Option<&[String]> {
        self.sources.as_ref().map(|s| s.urls.as_slice())
    }

    pub fn validator_endpoint(&self) -> Option<&str> {
        self.validator.as_ref().map(|v| v.endpoint.as_str())
    }

    pub fn chunk_size(&self) -> Option<usize> {
        self.batch.as_ref().map(|b| b.chunk_size)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(urls) = self.source_urls() {
            validate_url_list("sources.urls", urls)?;
        }
        if let Some(endpoint) = self.validator_endpoint() {
            validate_url("validator.endpoint", endpoint)?;
        }
        if let Some(chunk_size) = self.chunk_size() {
            validate_positive_number("batch.chunk_size", chunk_size, 1)?;
        }
        Ok(())
    }
}
