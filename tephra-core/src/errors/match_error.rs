//! Matching pipeline errors.
//! Aggregates subsystem errors via `From` conversions.

use super::error_code::{self, TephraErrorCode};
use super::{ConfigError, EvidenceError, TableError};

/// Errors that can occur during a matching run.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("Evidence error: {0}")]
    Evidence(#[from] EvidenceError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Matching run cancelled")]
    Cancelled,
}

impl TephraErrorCode for MatchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Evidence(e) => e.error_code(),
            Self::Table(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}
