//! Hierarchical confidence classification.
//!
//! An ordered, blocking rule evaluation: later stages run only if
//! earlier stages did not already decide. Literature evidence may raise
//! the verdict by exactly one level and never overrides a block.

pub mod rules;
pub mod types;

pub use rules::{classify, RuleContext, RULES};
pub use types::{ConfidenceLevel, QualityMetrics};
