//! Error type shared by the I/O boundary and instance validation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced before the search loop starts.
///
/// The optimization core itself never fails once it has a valid
/// [`ProblemInstance`](crate::models::ProblemInstance) and a valid
/// [`AlnsConfig`](crate::alns::AlnsConfig).
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("resource not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("format error at line {line}: {message}")]
    Format { line: usize, message: String },

    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RoutingError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RoutingError>;
