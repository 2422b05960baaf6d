//! The four dimension scorers: spatial, tectonic, petrological, temporal.
//!
//! Each scorer is a pure function returning a `DimensionScore` — either
//! `Present(value in [0,1])` or `Absent`. Absent means "insufficient
//! data" and must never silently contribute a zero downstream.

pub mod petrology;
pub mod spatial;
pub mod tectonic;
pub mod temporal;
pub mod types;

pub use petrology::score_petrology;
pub use spatial::score_spatial;
pub use tectonic::score_tectonic;
pub use temporal::score_temporal;
pub use types::{Dimension, DimensionScore};
