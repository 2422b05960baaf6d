//! Declarative normalization tables — re-tunable without recompiling.
//!
//! A `TablePackDef` is plain data (TOML-loadable); `MatchTables` is the
//! compiled form with keyword automata built once per load. Compiled
//! tables are immutable and safely shared read-only across threads.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use tephra_core::errors::TableError;
use tephra_core::types::collections::FxHashMap;

use super::types::{CrustType, Regime};

/// A declarative normalization table pack.
///
/// Field values are matched case-insensitively; builtin entries are kept
/// uppercase to mirror the canonical form the normalizers emit.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TablePackDef {
    /// Exact setting-domain string → regime name.
    pub domain_regimes: BTreeMap<String, String>,
    /// Keywords anywhere in the setting text → subduction.
    pub subduction_keywords: Vec<String>,
    /// Keywords anywhere in the setting text → rift.
    pub rift_keywords: Vec<String>,
    /// Keywords anywhere in the setting text → intraplate.
    pub intraplate_keywords: Vec<String>,
    /// Named volcanic arcs → subduction.
    pub named_arcs: Vec<String>,
    /// Named large igneous provinces → intraplate.
    pub named_lips: Vec<String>,
    /// Named hotspot chains → intraplate.
    pub named_hotspots: Vec<String>,
    /// Geological keywords implying continental crust.
    pub continental_keywords: Vec<String>,
    /// Geological keywords implying oceanic crust.
    pub oceanic_keywords: Vec<String>,
    /// Historic or alternate rock spelling → modern canonical name.
    pub rock_spellings: BTreeMap<String, String>,
    /// Two-part compound rock names that keep their internal hyphen.
    pub protected_hyphens: Vec<String>,
    /// Family name → canonical rock names in that family.
    pub rock_families: BTreeMap<String, Vec<String>>,
}

impl TablePackDef {
    /// The curated builtin table pack.
    pub fn builtin() -> Self {
        let mut domain_regimes = BTreeMap::new();
        domain_regimes.insert("SUBDUCTION ZONE".into(), "subduction".into());
        domain_regimes.insert("RIFT ZONE".into(), "rift".into());
        domain_regimes.insert("INTRAPLATE".into(), "intraplate".into());

        let mut rock_spellings = BTreeMap::new();
        // Historic name for rhyolite still common in older literature.
        rock_spellings.insert("LIPARITE".into(), "RHYOLITE".into());

        let mut rock_families = BTreeMap::new();
        rock_families.insert(
            "basaltic".into(),
            vec![
                "BASALT".into(),
                "TRACHYBASALT".into(),
                "PICROBASALT".into(),
                "PICRITE".into(),
                "BASALTIC ANDESITE".into(),
                "BASALTIC TRACHYANDESITE".into(),
            ],
        );
        rock_families.insert(
            "andesitic".into(),
            vec![
                "ANDESITE".into(),
                "TRACHYANDESITE".into(),
                "BONINITE".into(),
            ],
        );
        rock_families.insert(
            "felsic".into(),
            vec![
                "DACITE".into(),
                "TRACHYDACITE".into(),
                "RHYOLITE".into(),
                "TRACHYTE".into(),
                "OBSIDIAN".into(),
            ],
        );
        rock_families.insert(
            "foiditic".into(),
            vec![
                "FOIDITE".into(),
                "NEPHELINITE".into(),
                "LEUCITITE".into(),
                "MELILITITE".into(),
            ],
        );
        rock_families.insert(
            "basanitic".into(),
            vec![
                "BASANITE".into(),
                "TEPHRITE".into(),
                "PHONO-TEPHRITE".into(),
                "TEPHRI-PHONOLITE".into(),
                "PHONOLITE".into(),
            ],
        );

        Self {
            domain_regimes,
            subduction_keywords: vec![
                "SUBDUCTION".into(),
                "TRENCH".into(),
                "BACK-ARC".into(),
                "BACKARC".into(),
                "FORE-ARC".into(),
                "VOLCANIC ARC".into(),
                "ISLAND ARC".into(),
                "CONVERGENT".into(),
            ],
            rift_keywords: vec![
                "SPREADING".into(),
                "TRIPLE JUNCTION".into(),
                "RIFT".into(),
                "GRABEN".into(),
                "DIVERGENT".into(),
                "MID-OCEAN RIDGE".into(),
            ],
            intraplate_keywords: vec![
                "INTRAPLATE".into(),
                "HOTSPOT".into(),
                "HOT SPOT".into(),
                "FLOOD BASALT".into(),
                "CRATON".into(),
                "MANTLE PLUME".into(),
                "LARGE IGNEOUS PROVINCE".into(),
            ],
            named_arcs: vec![
                "ALEUTIAN".into(),
                "KURIL".into(),
                "IZU-BONIN".into(),
                "MARIANA".into(),
                "TONGA".into(),
                "KERMADEC".into(),
                "SUNDA".into(),
                "SCOTIA".into(),
                "CASCADES".into(),
                "LESSER ANTILLES".into(),
            ],
            named_lips: vec![
                "DECCAN".into(),
                "SIBERIAN TRAPS".into(),
                "COLUMBIA RIVER".into(),
                "PARANA".into(),
                "KAROO".into(),
                "ONTONG JAVA".into(),
                "KERGUELEN".into(),
                "EMEISHAN".into(),
            ],
            named_hotspots: vec![
                "HAWAII".into(),
                "GALAPAGOS".into(),
                "YELLOWSTONE".into(),
                "REUNION".into(),
                "CANARY".into(),
                "AZORES".into(),
                "SOCIETY".into(),
                "SAMOA".into(),
                "TRISTAN".into(),
                "CAPE VERDE".into(),
            ],
            continental_keywords: vec![
                "CRATON".into(),
                "SHIELD".into(),
                "CONTINENTAL".into(),
            ],
            oceanic_keywords: vec![
                "ABYSSAL".into(),
                "SEAMOUNT".into(),
                "OCEANIC".into(),
            ],
            rock_spellings,
            protected_hyphens: vec!["PHONO-TEPHRITE".into(), "TEPHRI-PHONOLITE".into()],
            rock_families,
        }
    }
}

/// Compiled normalization tables.
pub struct MatchTables {
    domain_regimes: FxHashMap<String, Regime>,
    keyword_ac: AhoCorasick,
    keyword_regimes: Vec<Regime>,
    feature_ac: AhoCorasick,
    feature_regimes: Vec<Regime>,
    crust_ac: AhoCorasick,
    crust_kinds: Vec<CrustType>,
    rock_spellings: FxHashMap<String, String>,
    protected_hyphens: Vec<String>,
    family_of: FxHashMap<String, String>,
}

impl MatchTables {
    /// Compile the curated builtin pack.
    pub fn builtin() -> Self {
        // The builtin pack is validated by tests; a failure here is a bug
        // in the builtin data, not a runtime condition.
        Self::compile(TablePackDef::builtin()).expect("builtin table pack must compile")
    }

    /// Load and compile a table pack from a TOML string.
    pub fn load_from_str(toml_str: &str) -> Result<Self, TableError> {
        let def: TablePackDef =
            toml::from_str(toml_str).map_err(|e| TableError::ParseError(e.to_string()))?;
        Self::compile(def)
    }

    /// Load and compile a table pack from a file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TableError::ParseError(format!("failed to read {}: {e}", path.display())))?;
        Self::load_from_str(&content)
    }

    /// Compile a pack: validate regime names, build keyword automata,
    /// index rock families.
    pub fn compile(def: TablePackDef) -> Result<Self, TableError> {
        let mut domain_regimes = FxHashMap::default();
        for (domain, regime_name) in &def.domain_regimes {
            let regime =
                Regime::parse_str(regime_name).ok_or_else(|| TableError::UnknownRegime {
                    domain: domain.clone(),
                    regime: regime_name.clone(),
                })?;
            domain_regimes.insert(domain.to_uppercase(), regime);
        }

        let mut keyword_patterns = Vec::new();
        let mut keyword_regimes = Vec::new();
        for (list, regime) in [
            (&def.subduction_keywords, Regime::Subduction),
            (&def.rift_keywords, Regime::Rift),
            (&def.intraplate_keywords, Regime::Intraplate),
        ] {
            for kw in list {
                keyword_patterns.push(kw.clone());
                keyword_regimes.push(regime);
            }
        }
        let keyword_ac = build_automaton(&keyword_patterns)?;

        let mut feature_patterns = Vec::new();
        let mut feature_regimes = Vec::new();
        for (list, regime) in [
            (&def.named_arcs, Regime::Subduction),
            (&def.named_lips, Regime::Intraplate),
            (&def.named_hotspots, Regime::Intraplate),
        ] {
            for name in list {
                feature_patterns.push(name.clone());
                feature_regimes.push(regime);
            }
        }
        let feature_ac = build_automaton(&feature_patterns)?;

        let mut crust_patterns = Vec::new();
        let mut crust_kinds = Vec::new();
        for (list, kind) in [
            (&def.continental_keywords, CrustType::Continental),
            (&def.oceanic_keywords, CrustType::Oceanic),
        ] {
            for kw in list {
                crust_patterns.push(kw.clone());
                crust_kinds.push(kind);
            }
        }
        let crust_ac = build_automaton(&crust_patterns)?;

        let mut rock_spellings = FxHashMap::default();
        for (alt, canonical) in &def.rock_spellings {
            rock_spellings.insert(alt.to_uppercase(), canonical.to_uppercase());
        }

        let mut family_of: FxHashMap<String, String> = FxHashMap::default();
        for (family, rocks) in &def.rock_families {
            for rock in rocks {
                let rock = rock.to_uppercase();
                if let Some(existing) = family_of.get(&rock) {
                    return Err(TableError::DuplicateFamilyRock {
                        rock,
                        family_a: existing.clone(),
                        family_b: family.clone(),
                    });
                }
                family_of.insert(rock, family.clone());
            }
        }

        let protected_hyphens = def
            .protected_hyphens
            .iter()
            .map(|s| s.to_uppercase())
            .collect();

        Ok(Self {
            domain_regimes,
            keyword_ac,
            keyword_regimes,
            feature_ac,
            feature_regimes,
            crust_ac,
            crust_kinds,
            rock_spellings,
            protected_hyphens,
            family_of,
        })
    }

    /// Exact domain-string lookup (highest-priority regime evidence).
    pub fn regime_for_domain(&self, domain: &str) -> Option<Regime> {
        self.domain_regimes.get(domain).copied()
    }

    /// Keyword search over the full setting text.
    pub fn regime_from_keywords(&self, text: &str) -> Option<Regime> {
        self.keyword_ac
            .find(text)
            .map(|m| self.keyword_regimes[m.pattern().as_usize()])
    }

    /// Named-feature lookup (arcs, LIPs, hotspot chains).
    pub fn regime_from_features(&self, text: &str) -> Option<Regime> {
        self.feature_ac
            .find(text)
            .map(|m| self.feature_regimes[m.pattern().as_usize()])
    }

    /// Crust type from geological keywords.
    pub fn crust_from_keywords(&self, text: &str) -> Option<CrustType> {
        self.crust_ac
            .find(text)
            .map(|m| self.crust_kinds[m.pattern().as_usize()])
    }

    /// Canonical spelling for a historic/alternate rock name.
    pub fn canonical_rock_spelling(&self, rock: &str) -> Option<&str> {
        self.rock_spellings.get(rock).map(String::as_str)
    }

    /// Whether a rock name is a protected hyphenated compound.
    pub fn is_protected_compound(&self, rock: &str) -> bool {
        self.protected_hyphens.iter().any(|p| p == rock)
    }

    /// Family of a canonical rock name, if it belongs to one.
    pub fn family_of(&self, rock: &str) -> Option<&str> {
        self.family_of.get(rock).map(String::as_str)
    }

    /// Whether two canonical rock names share a family.
    pub fn same_family(&self, a: &str, b: &str) -> bool {
        match (self.family_of(a), self.family_of(b)) {
            (Some(fa), Some(fb)) => fa == fb,
            _ => false,
        }
    }
}

/// Build a case-insensitive keyword automaton.
fn build_automaton(patterns: &[String]) -> Result<AhoCorasick, TableError> {
    AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(patterns)
        .map_err(|e| TableError::AutomatonBuildFailed(e.to_string()))
}
