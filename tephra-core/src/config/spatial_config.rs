//! Spatial scoring configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the spatial dimension scorer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpatialConfig {
    /// Exponential decay constant in kilometers. Default: 30.0.
    pub decay_km: Option<f64>,
    /// Spatial score below which attribution is considered unreliable
    /// when coverage is also low. Default: 0.30.
    pub uncertainty_threshold: Option<f64>,
}

impl SpatialConfig {
    pub fn effective_decay_km(&self) -> f64 {
        self.decay_km.unwrap_or(30.0)
    }

    pub fn effective_uncertainty_threshold(&self) -> f64 {
        self.uncertainty_threshold.unwrap_or(0.30)
    }
}
