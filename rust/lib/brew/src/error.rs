use thiserror::Error;

/// Failure reported by a `BrewApi` transport.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),

    #[error("storage: {0}")]
    Storage(String),
}

/// A single field that failed validation on step submit or draft finalize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn required(field: &str) -> Self {
        Self::new(field, "is required")
    }

    pub fn not_an_option(field: &str) -> Self {
        Self::new(field, "must be one of the listed options")
    }

    pub fn not_a_number(field: &str) -> Self {
        Self::new(field, "must be a non-negative number")
    }
}

/// Failure loading or saving the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
