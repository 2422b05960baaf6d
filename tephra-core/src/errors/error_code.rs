//! Stable string error codes for downstream consumers.

/// Trait implemented by every subsystem error to expose a stable code.
pub trait TephraErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_ERROR: &str = "TEPHRA_CONFIG";
pub const TABLE_ERROR: &str = "TEPHRA_TABLE";
pub const EVIDENCE_ERROR: &str = "TEPHRA_EVIDENCE";
pub const CANCELLED: &str = "TEPHRA_CANCELLED";
