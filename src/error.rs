//! Error types for expert-review

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[allow(dead_code)]
    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::infrastructure::catalog_csv::CatalogError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid vehicle file {path}: {reason}")]
    InvalidVehicleFile { path: String, reason: String },

    #[error("No vehicle files found in {0}")]
    EmptyBatch(String),
}

pub type Result<T> = std::result::Result<T, Error>;
