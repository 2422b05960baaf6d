//! Temporal scoring configuration.

use serde::{Deserialize, Serialize};

use crate::types::SourceDb;

/// Configuration for the temporal dimension scorer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TemporalConfig {
    /// Reference year for years-before-present computation. Default: 2025.
    pub reference_year: Option<i32>,
    /// Holocene plausibility window in years BP. Default: 11700.
    pub holocene_window_years: Option<i64>,
    /// Precision floor for GVP-sourced records. Default: 0.60.
    pub gvp_precision_floor: Option<f64>,
    /// Precision floor for every other source. Default: 0.45.
    pub default_precision_floor: Option<f64>,
}

impl TemporalConfig {
    pub fn effective_reference_year(&self) -> i32 {
        self.reference_year.unwrap_or(2025)
    }

    pub fn effective_holocene_window_years(&self) -> i64 {
        self.holocene_window_years.unwrap_or(11_700)
    }

    /// Precision floor for a source database. GVP dating rigor earns a
    /// higher floor than the aggregated geochemical compilations.
    pub fn precision_floor(&self, source: SourceDb) -> f64 {
        match source {
            SourceDb::Gvp => self.gvp_precision_floor.unwrap_or(0.60),
            SourceDb::Georoc | SourceDb::Other => {
                self.default_precision_floor.unwrap_or(0.45)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gvp_floor_is_higher() {
        let cfg = TemporalConfig::default();
        assert!(cfg.precision_floor(SourceDb::Gvp) > cfg.precision_floor(SourceDb::Georoc));
        assert_eq!(
            cfg.precision_floor(SourceDb::Georoc),
            cfg.precision_floor(SourceDb::Other)
        );
    }
}
