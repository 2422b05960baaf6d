//! Top-level engine configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClassifierConfig, SpatialConfig, TemporalConfig, WeightConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TEPHRA_*`)
/// 2. Project config (`tephra.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: WeightConfig,
    pub spatial: SpatialConfig,
    pub temporal: TemporalConfig,
    pub classifier: ClassifierConfig,
}

impl EngineConfig {
    /// Load configuration with 3-layer resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 2: project config
        let project_config_path = root.join("tephra.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
        let unit_fields = [
            ("classifier.coverage_floor", config.classifier.coverage_floor),
            ("classifier.ambiguity_gap", config.classifier.ambiguity_gap),
            ("classifier.low_coverage", config.classifier.low_coverage),
            ("classifier.high_score", config.classifier.high_score),
            ("classifier.high_coverage", config.classifier.high_coverage),
            ("classifier.high_gap", config.classifier.high_gap),
            ("classifier.medium_score", config.classifier.medium_score),
            ("classifier.medium_coverage", config.classifier.medium_coverage),
            ("classifier.medium_gap", config.classifier.medium_gap),
            ("spatial.uncertainty_threshold", config.spatial.uncertainty_threshold),
        ];
        for (field, value) in unit_fields {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }

        if let Some(decay) = config.spatial.decay_km {
            if !decay.is_finite() || decay <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "spatial.decay_km".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        if let Some(window) = config.temporal.holocene_window_years {
            if window <= 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "temporal.holocene_window_years".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }

        let weight_sum = config.weights.effective_spatial()
            + config.weights.effective_tectonic()
            + config.weights.effective_petrological()
            + config.weights.effective_temporal();
        if weight_sum <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "weights".to_string(),
                message: "at least one dimension weight must be positive".to_string(),
            });
        }

        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut EngineConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: EngineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut EngineConfig, other: &EngineConfig) {
        // Weights
        if other.weights.spatial.is_some() {
            base.weights.spatial = other.weights.spatial;
        }
        if other.weights.tectonic.is_some() {
            base.weights.tectonic = other.weights.tectonic;
        }
        if other.weights.petrological.is_some() {
            base.weights.petrological = other.weights.petrological;
        }
        if other.weights.temporal.is_some() {
            base.weights.temporal = other.weights.temporal;
        }

        // Spatial
        if other.spatial.decay_km.is_some() {
            base.spatial.decay_km = other.spatial.decay_km;
        }
        if other.spatial.uncertainty_threshold.is_some() {
            base.spatial.uncertainty_threshold = other.spatial.uncertainty_threshold;
        }

        // Temporal
        if other.temporal.reference_year.is_some() {
            base.temporal.reference_year = other.temporal.reference_year;
        }
        if other.temporal.holocene_window_years.is_some() {
            base.temporal.holocene_window_years = other.temporal.holocene_window_years;
        }
        if other.temporal.gvp_precision_floor.is_some() {
            base.temporal.gvp_precision_floor = other.temporal.gvp_precision_floor;
        }
        if other.temporal.default_precision_floor.is_some() {
            base.temporal.default_precision_floor = other.temporal.default_precision_floor;
        }

        // Classifier
        if other.classifier.coverage_floor.is_some() {
            base.classifier.coverage_floor = other.classifier.coverage_floor;
        }
        if other.classifier.ambiguity_gap.is_some() {
            base.classifier.ambiguity_gap = other.classifier.ambiguity_gap;
        }
        if other.classifier.low_coverage.is_some() {
            base.classifier.low_coverage = other.classifier.low_coverage;
        }
        if other.classifier.high_score.is_some() {
            base.classifier.high_score = other.classifier.high_score;
        }
        if other.classifier.high_coverage.is_some() {
            base.classifier.high_coverage = other.classifier.high_coverage;
        }
        if other.classifier.high_gap.is_some() {
            base.classifier.high_gap = other.classifier.high_gap;
        }
        if other.classifier.medium_score.is_some() {
            base.classifier.medium_score = other.classifier.medium_score;
        }
        if other.classifier.medium_coverage.is_some() {
            base.classifier.medium_coverage = other.classifier.medium_coverage;
        }
        if other.classifier.medium_gap.is_some() {
            base.classifier.medium_gap = other.classifier.medium_gap;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TEPHRA_SPATIAL_DECAY_KM`, `TEPHRA_REFERENCE_YEAR`, etc.
    fn apply_env_overrides(config: &mut EngineConfig) {
        if let Ok(val) = std::env::var("TEPHRA_SPATIAL_DECAY_KM") {
            if let Ok(v) = val.parse::<f64>() {
                config.spatial.decay_km = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TEPHRA_REFERENCE_YEAR") {
            if let Ok(v) = val.parse::<i32>() {
                config.temporal.reference_year = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TEPHRA_COVERAGE_FLOOR") {
            if let Ok(v) = val.parse::<f64>() {
                config.classifier.coverage_floor = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TEPHRA_AMBIGUITY_GAP") {
            if let Ok(v) = val.parse::<f64>() {
                config.classifier.ambiguity_gap = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(EngineConfig::validate(&config).is_ok());
    }

    #[test]
    fn test_from_toml_overrides() {
        let config = EngineConfig::from_toml(
            r#"
            [weights]
            spatial = 0.4

            [temporal]
            reference_year = 2020
            "#,
        )
        .unwrap();
        assert_eq!(config.weights.effective_spatial(), 0.4);
        assert_eq!(config.temporal.effective_reference_year(), 2020);
        // Untouched fields keep defaults
        assert_eq!(config.weights.effective_tectonic(), 0.25);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let result = EngineConfig::from_toml(
            r#"
            [classifier]
            coverage_floor = 1.5
            "#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed { ref field, .. }) if field == "classifier.coverage_floor"
        ));
    }

    #[test]
    fn test_invalid_decay_rejected() {
        let result = EngineConfig::from_toml(
            r#"
            [spatial]
            decay_km = -5.0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_project_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("tephra.toml"),
            "[classifier]\nambiguity_gap = 0.15\n",
        )
        .unwrap();
        let config = EngineConfig::load(dir.path()).unwrap();
        assert_eq!(config.classifier.effective_ambiguity_gap(), 0.15);
    }

    #[test]
    fn test_missing_project_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load(dir.path()).unwrap();
        assert_eq!(config.spatial.effective_decay_km(), 30.0);
    }
}
