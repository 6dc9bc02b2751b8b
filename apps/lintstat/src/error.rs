//! Error types for report loading and configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures while reading and parsing a lint report.
pub enum LoadError {
    #[error("report file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no JSON start token '[' found in {}", path.display())]
    NoJsonStart { path: PathBuf },
    #[error("malformed JSON in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing expected key in {}: {source}", path.display())]
    MissingKey {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid report pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl LoadError {
    /// Classify a serde_json failure: syntax and EOF problems are malformed
    /// input, data errors mean the JSON had the wrong shape.
    pub(crate) fn from_json(path: PathBuf, source: serde_json::Error) -> Self {
        match source.classify() {
            serde_json::error::Category::Data => LoadError::MissingKey { path, source },
            _ => LoadError::Malformed { path, source },
        }
    }
}

#[derive(Debug, Error)]
/// Invalid settings from CLI flags or `lintstat.toml`.
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid pattern for category '{title}': {source}")]
    Regex {
        title: String,
        #[source]
        source: regex::Error,
    },
    #[error("unknown output mode '{0}' (expected human|json)")]
    Output(String),
    #[error("unknown severity '{0}' (expected warning|error|any)")]
    Severity(String),
}
