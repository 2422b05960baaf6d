//! # tephra-engine
//!
//! Sample-to-volcano matching and confidence scoring.
//!
//! A pure evaluation engine: given a geochemical rock sample and a
//! candidate volcano, it computes per-dimension similarity scores
//! (spatial, tectonic, petrological, temporal), a coverage-weighted
//! final score, and a hierarchical confidence verdict. Data flows
//! strictly downward: evidence → normalize → score → aggregate →
//! classify → explain. No I/O, no shared mutable state.

pub mod aggregate;
pub mod confidence;
pub mod explain;
pub mod normalize;
pub mod pipeline;
pub mod score;

pub use explain::{explain, ExplanationReport};
pub use pipeline::{BulkMatcher, MatchEngine, MatchResult, SampleMatch};
