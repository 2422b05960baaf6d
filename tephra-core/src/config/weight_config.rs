//! Aggregation weight configuration.

use serde::{Deserialize, Serialize};

/// Per-dimension aggregation weights.
///
/// The canonical balanced set. Weights are renormalized over the
/// dimensions actually present for a pair, so absolute magnitudes only
/// matter relative to each other.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeightConfig {
    /// Weight of the spatial dimension. Default: 0.30.
    pub spatial: Option<f64>,
    /// Weight of the tectonic dimension. Default: 0.25.
    pub tectonic: Option<f64>,
    /// Weight of the petrological dimension. Default: 0.25.
    pub petrological: Option<f64>,
    /// Weight of the temporal dimension. Default: 0.20.
    pub temporal: Option<f64>,
}

impl WeightConfig {
    pub fn effective_spatial(&self) -> f64 {
        sanitize(self.spatial, 0.30)
    }

    pub fn effective_tectonic(&self) -> f64 {
        sanitize(self.tectonic, 0.25)
    }

    pub fn effective_petrological(&self) -> f64 {
        sanitize(self.petrological, 0.25)
    }

    pub fn effective_temporal(&self) -> f64 {
        sanitize(self.temporal, 0.20)
    }
}

/// Clamps negative weights to 0.0, replaces NaN with the default.
fn sanitize(raw: Option<f64>, default: f64) -> f64 {
    match raw {
        Some(w) if w.is_nan() => default,
        Some(w) if w < 0.0 => 0.0,
        Some(w) => w,
        None => default,
    }
}
