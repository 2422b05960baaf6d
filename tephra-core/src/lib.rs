//! # tephra-core
//!
//! Core types, traits, errors, and configuration for the Tephra
//! sample-to-volcano matching engine. No scoring logic lives here.

pub mod config;
pub mod errors;
pub mod traits;
pub mod types;
