use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to fetch word list {url}: {source}")]
    FetchError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Validator answered for '{received}' when asked about '{requested}'")]
    EchoMismatch { requested: String, received: String },

    #[error("Failed to validate word '{word}' after {attempts} attempts: {source}")]
    ValidationExhausted {
        word: String,
        attempts: u32,
        #[source]
        source: Box<WordListError>,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Validation,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl WordListError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) | Self::FetchError { .. } => ErrorCategory::Network,
            Self::SerializationError(_)
            | Self::EchoMismatch { .. }
            | Self::ValidationExhausted { .. } => ErrorCategory::Validation,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Network | ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Validation => 2,
            ErrorCategory::Network | ErrorCategory::Io => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::FetchError { .. } | Self::HttpError(_) => {
                "Check network connectivity and that every source URL is reachable"
            }
            Self::ValidationExhausted { .. } | Self::EchoMismatch { .. } => {
                "The validity service kept failing; wait a moment and rerun"
            }
            Self::SerializationError(_) => "The validity service returned an unexpected payload",
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Review the command line flags and the configuration file"
            }
            Self::IoError(_) => "Check that the output path is writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::FetchError { url, .. } => format!("Could not download word list {}", url),
            Self::ValidationExhausted { word, attempts, .. } => {
                format!("Could not validate '{}' after {} attempts", word, attempts)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("Missing setting '{}'", field),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WordListError>;
