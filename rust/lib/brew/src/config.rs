//! Configuration — `~/.brewlog/config.toml`.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::{BrewApi, FileBrewApi, HttpBrewApi, MemoryBrewApi};
use crate::error::{ApiError, ConfigError};

/// What happens to the save control after a failed submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Editing the rating clears the error and re-enables saving.
    #[default]
    AfterEdit,
    /// Saving stays disabled for the rest of this draft.
    Never,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowConfig {
    #[serde(default)]
    pub retry_after_failure: RetryPolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    #[default]
    File,
    Http,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub backend: Backend,
    /// Server URL for the `http` backend.
    pub base_url: String,
    /// Brew file for the `file` backend; a leading `~/` is the home dir.
    pub path: String,
    /// Per-request timeout for the `http` backend. 0 disables it.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend: Backend::File,
            base_url: "http://localhost:3000".to_string(),
            path: "~/.brewlog/brews.json".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ApiConfig {
    /// Build the transport this config selects.
    pub fn build(&self) -> Result<Arc<dyn BrewApi>, ApiError> {
        let api: Arc<dyn BrewApi> = match self.backend {
            Backend::File => Arc::new(FileBrewApi::new(expand_home(&self.path))),
            Backend::Http if self.timeout_secs > 0 => Arc::new(HttpBrewApi::with_timeout(
                &self.base_url,
                Duration::from_secs(self.timeout_secs),
            )?),
            Backend::Http => Arc::new(HttpBrewApi::new(&self.base_url)),
            Backend::Memory => Arc::new(MemoryBrewApi::new()),
        };
        Ok(api)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrewlogConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub flow: FlowConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl BrewlogConfig {
    /// Default config file path: ~/.brewlog/config.toml.
    pub fn default_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Load config from disk, or return defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }
}

/// The brewlog directory (~/.brewlog).
fn config_dir() -> PathBuf {
    home_dir().join(".brewlog")
}

fn home_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BrewlogConfig::default();
        assert_eq!(config.api.backend, Backend::File);
        assert_eq!(config.flow.retry_after_failure, RetryPolicy::AfterEdit);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: BrewlogConfig = toml::from_str(
            r#"
            [api]
            backend = "http"
            base_url = "http://brews.local:8080"

            [flow]
            retry_after_failure = "never"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.backend, Backend::Http);
        assert_eq!(config.api.base_url, "http://brews.local:8080");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.flow.retry_after_failure, RetryPolicy::Never);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn unknown_backend_is_parse_error() {
        let err = toml::from_str::<BrewlogConfig>("[api]\nbackend = \"ftp\"\n").unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }

    #[test]
    fn loads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nbackend = \"memory\"\n\n[log]\nfilter = \"brewlog=debug\"\n").unwrap();

        let config = BrewlogConfig::load(&path).unwrap();
        assert_eq!(config.api.backend, Backend::Memory);
        assert_eq!(config.log.filter, "brewlog=debug");
        assert_eq!(config.flow, FlowConfig::default());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BrewlogConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, BrewlogConfig::default());
    }

    #[test]
    fn expand_home_only_touches_tilde_prefix() {
        assert_eq!(expand_home("/tmp/brews.json"), PathBuf::from("/tmp/brews.json"));
        assert!(expand_home("~/x.json").ends_with("x.json"));
        assert_ne!(expand_home("~/x.json"), PathBuf::from("~/x.json"));
    }
}
