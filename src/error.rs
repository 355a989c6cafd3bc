use crate::types::Position;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenmazeError {
    #[error("Invalid maze dimensions {rows}x{cols}: both must be at least 3")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("No path from {start} to {end}")]
    NoPathFound { start: Position, end: Position },

    #[error("Need at least 2 parents to breed, got {available}")]
    InsufficientParents { available: usize },

    #[error("Malformed grid: {0}")]
    MalformedGrid(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config source error: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, GenmazeError>;
