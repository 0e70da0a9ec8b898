//! Top-level errors of the client binary.

use thiserror::Error;

use crate::{config::ConfigError, domain::PaginationError};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Pagination error: {0}")]
    Pagination(#[from] PaginationError),

    #[error("Console input failed: {0}")]
    Readline(String),
}
