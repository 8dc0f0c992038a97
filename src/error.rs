use thiserror::Error;

/// Custom error types for tripseek
#[derive(Debug, Error)]
pub enum TripseekError {
    #[error("Invalid place catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid config file: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
