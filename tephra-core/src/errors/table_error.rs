//! Normalization table errors.

use super::error_code::{self, TephraErrorCode};

/// Errors that can occur while loading a normalization table pack.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Failed to parse table pack: {0}")]
    ParseError(String),

    #[error("Unknown regime '{regime}' for domain '{domain}'")]
    UnknownRegime { domain: String, regime: String },

    #[error("Rock '{rock}' appears in both family '{family_a}' and family '{family_b}'")]
    DuplicateFamilyRock {
        rock: String,
        family_a: String,
        family_b: String,
    },

    #[error("Keyword automaton build failed: {0}")]
    AutomatonBuildFailed(String),
}

impl TephraErrorCode for TableError {
    fn error_code(&self) -> &'static str {
        error_code::TABLE_ERROR
    }
}
