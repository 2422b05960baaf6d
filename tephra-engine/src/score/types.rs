//! Core types for dimension scoring.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Spatial,
    Tectonic,
    Petrological,
    Temporal,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Spatial,
        Dimension::Tectonic,
        Dimension::Petrological,
        Dimension::Temporal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Spatial => "spatial",
            Self::Tectonic => "tectonic",
            Self::Petrological => "petrological",
            Self::Temporal => "temporal",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dimension score: a value in [0,1] or "insufficient data".
///
/// `Absent` is never 0 — a score of 0 only ever results from an explicit
/// mismatch, never from not knowing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DimensionScore {
    Present(f64),
    Absent,
}

impl DimensionScore {
    /// Wrap a raw score value. Non-finite values become `Absent` so NaN
    /// can never propagate into the weighted sum; finite values are
    /// clamped to [0,1].
    pub fn from_value(value: f64) -> Self {
        if value.is_finite() {
            Self::Present(value.clamp(0.0, 1.0))
        } else {
            Self::Absent
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Present(v) => Some(*v),
            Self::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}
