//! Error types for the library API.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failures while reading or decoding a YAML document or prompt file.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file is missing or unreadable.
    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML or does not match the expected shape.
    #[error("Error parsing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Failures while persisting rendered prompts or responses.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Error creating directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of the LLM gateway. Everything past initialization carries
/// the `chat failed:` prefix.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("unsupported LLM provider: {0}")]
    UnsupportedProvider(String),

    #[error("failed to initialize LLM provider {provider}: environment variable '{var}' is not set")]
    MissingCredentials { provider: String, var: String },

    #[error("failed to initialize LLM provider {provider}: {message}")]
    Init { provider: String, message: String },

    #[error("chat failed: no response within {0:?}")]
    Timeout(Duration),

    #[error("chat failed: {0}")]
    Backend(String),

    #[error("chat failed: could not write streamed output: {0}")]
    Stream(#[from] std::io::Error),
}

impl From<llm::error::LLMError> for GatewayError {
    fn from(err: llm::error::LLMError) -> Self {
        GatewayError::Backend(err.to_string())
    }
}

/// Failures while loading the user settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid duration '{0}' (expected e.g. 90s, 2m, 1m30s)")]
    InvalidDuration(String),
}

/// A comprehensive error type for every command.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Progress output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
