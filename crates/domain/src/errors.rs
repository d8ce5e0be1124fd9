//! Error types used throughout the clinic service

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the clinic service
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ClinicError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for clinic operations
pub type Result<T> = std::result::Result<T, ClinicError>;
