//! Error handling for Tephra.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod evidence_error;
pub mod match_error;
pub mod table_error;

pub use config_error::ConfigError;
pub use error_code::TephraErrorCode;
pub use evidence_error::EvidenceError;
pub use match_error::MatchError;
pub use table_error::TableError;
