//! Controlled vocabularies produced by normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tectonic regime bucket derived from free-text setting descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regime {
    Subduction,
    Rift,
    Intraplate,
    Unknown,
}

impl Regime {
    /// Parse a table-pack regime name. Returns `None` for unknown names
    /// so table validation can reject them loudly.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "subduction" => Some(Self::Subduction),
            "rift" => Some(Self::Rift),
            "intraplate" => Some(Self::Intraplate),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Subduction => "subduction",
            Self::Rift => "rift",
            Self::Intraplate => "intraplate",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Crust type derived from depth markers or geological keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrustType {
    Oceanic,
    Continental,
    Intermediate,
    Unknown,
}

impl CrustType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Oceanic => "oceanic",
            Self::Continental => "continental",
            Self::Intermediate => "intermediate",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CrustType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized tectonic setting: regime plus crust modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTectonic {
    pub regime: Regime,
    pub crust: CrustType,
}

impl NormalizedTectonic {
    pub fn unknown() -> Self {
        Self {
            regime: Regime::Unknown,
            crust: CrustType::Unknown,
        }
    }
}

/// Geological era class, ordered from oldest to youngest so that
/// `Holocene > Pleistocene > Neogene > Older` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeClass {
    Older,
    Neogene,
    Pleistocene,
    Holocene,
}

impl AgeClass {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Older => "older",
            Self::Neogene => "neogene",
            Self::Pleistocene => "pleistocene",
            Self::Holocene => "holocene",
        }
    }
}

impl fmt::Display for AgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Age qualifier kept separately as a precision signal, never folded
/// into the era classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgePrefix {
    /// "Early" / "Lower" — less precise end of the era.
    Early,
    /// "Late" / "Upper" / "Recent" — more precise end of the era.
    Late,
}

/// Normalized geological age: era class plus optional precision prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedAge {
    pub class: AgeClass,
    pub prefix: Option<AgePrefix>,
}
