//! Configuration system for Tephra.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod classifier_config;
pub mod engine_config;
pub mod spatial_config;
pub mod temporal_config;
pub mod weight_config;

pub use classifier_config::ClassifierConfig;
pub use engine_config::EngineConfig;
pub use spatial_config::SpatialConfig;
pub use temporal_config::TemporalConfig;
pub use weight_config::WeightConfig;
