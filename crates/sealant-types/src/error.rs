//! Error types for sealant-calculator

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Link-shortening errors
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Shortener request failed: {0}")]
    Request(String),

    #[error("Shortener returned HTTP {0}")]
    Status(u16),

    #[error("Shortener returned an empty or malformed response")]
    EmptyResponse,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Share error: {0}")]
    Share(#[from] ShareError),

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown joint profile: {0}")]
    UnknownProfile(String),

    #[error("Unknown cartridge: {0}")]
    UnknownCartridge(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

impl Error {
    /// Build an input-validation error for a named field
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by user-supplied values
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput { .. } | Error::UnknownProfile(_) | Error::UnknownCartridge(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
