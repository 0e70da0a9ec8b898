//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomId must be a positive integer
    #[error("RoomId must be a positive integer (got {0})")]
    RoomIdNotPositive(i64),

    /// RoomId could not be parsed from text
    #[error("RoomId must be a number (got: {0})")]
    RoomIdInvalidFormat(String),

    /// RoomType validation error
    #[error("RoomType cannot be empty")]
    RoomTypeEmpty,

    /// Price validation error
    #[error("Price cannot be negative (got {0})")]
    PriceNegative(String),
}

/// Errors returned by a [`RoomRepository`](super::RoomRepository) implementation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("{message} (status {status})")]
    Status { status: u16, message: String },

    /// The backend answered with a success status but reported a failure in the body
    #[error("{0}")]
    Rejected(String),

    /// The response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Errors related to pagination requests
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    /// Page numbers are 1-based
    #[error("Page {requested} is out of range: pages start at 1")]
    PageOutOfRange { requested: usize },

    /// Page size must hold at least one row
    #[error("Page size must be at least 1")]
    PageSizeZero,
}
