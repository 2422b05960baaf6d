//! Tectonic setting normalization.
//!
//! Input is free text, often of the form `"DOMAIN / DETAIL"` with an
//! occasional `"nan / "` sentinel prefix from upstream ETL.

use tephra_core::types::collections::FxHashMap;

use super::tables::MatchTables;
use super::types::{CrustType, NormalizedTectonic, Regime};
use super::is_sentinel;

/// Normalize a free-text tectonic setting into `{regime, crust}`.
///
/// Regime priority: exact domain lookup, then keyword search over the
/// full text, then named-feature lookup. Crust: explicit depth markers,
/// then geological keywords. Unrecognized input yields
/// `{unknown, unknown}`, a valid non-error outcome.
pub fn normalize_tectonic(raw: &str, tables: &MatchTables) -> NormalizedTectonic {
    let text = canonical_text(raw);
    if is_sentinel(&text) {
        return NormalizedTectonic::unknown();
    }

    let regime = classify_regime(&text, tables);
    let crust = classify_crust(&text, tables);
    NormalizedTectonic { regime, crust }
}

/// Uppercase, trim, strip the `"NAN / "` sentinel prefix.
fn canonical_text(raw: &str) -> String {
    let mut text = raw.trim().to_uppercase();
    if let Some(stripped) = text.strip_prefix("NAN / ") {
        text = stripped.trim().to_string();
    }
    text
}

fn classify_regime(text: &str, tables: &MatchTables) -> Regime {
    // (a) exact domain lookup on the part before the first slash;
    // upstream sources are inconsistent about spaces around it
    let domain = text.split('/').next().unwrap_or(text).trim();
    if let Some(regime) = tables.regime_for_domain(domain) {
        return regime;
    }
    // (b) keyword search over the full text
    if let Some(regime) = tables.regime_from_keywords(text) {
        return regime;
    }
    // (c) named arcs, LIPs, hotspot chains
    if let Some(regime) = tables.regime_from_features(text) {
        return regime;
    }
    Regime::Unknown
}

fn classify_crust(text: &str, tables: &MatchTables) -> CrustType {
    // Explicit depth markers take precedence over keywords. The
    // intermediate range carries no comparison sign, so test it first.
    const INTERMEDIATE_MARKERS: &[&str] = &["15-25", "15–25", "15 - 25"];
    const OCEANIC_MARKERS: &[&str] = &["< 15", "<15"];
    const CONTINENTAL_MARKERS: &[&str] = &["> 25", ">25"];

    if INTERMEDIATE_MARKERS.iter().any(|m| text.contains(m)) {
        return CrustType::Intermediate;
    }
    if OCEANIC_MARKERS.iter().any(|m| text.contains(m)) {
        return CrustType::Oceanic;
    }
    if CONTINENTAL_MARKERS.iter().any(|m| text.contains(m)) {
        return CrustType::Continental;
    }

    tables.crust_from_keywords(text).unwrap_or(CrustType::Unknown)
}

/// Normalize a batch of distinct setting strings, deduplicating lookups.
/// Useful for bulk ingestion where settings repeat heavily.
pub fn normalize_tectonic_batch<'a>(
    raws: impl IntoIterator<Item = &'a str>,
    tables: &MatchTables,
) -> FxHashMap<String, NormalizedTectonic> {
    let mut out = FxHashMap::default();
    for raw in raws {
        out.entry(raw.to_string())
            .or_insert_with(|| normalize_tectonic(raw, tables));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> MatchTables {
        MatchTables::builtin()
    }

    #[test]
    fn test_domain_lookup_with_crust_detail() {
        let t = normalize_tectonic("Subduction zone / Continental crust (> 25 km)", &tables());
        assert_eq!(t.regime, Regime::Subduction);
        assert_eq!(t.crust, CrustType::Continental);
    }

    #[test]
    fn test_rift_oceanic_depth_marker() {
        let t = normalize_tectonic("Rift zone / Oceanic crust (< 15 km)", &tables());
        assert_eq!(t.regime, Regime::Rift);
        assert_eq!(t.crust, CrustType::Oceanic);
    }

    #[test]
    fn test_intermediate_crust_range() {
        let t = normalize_tectonic("Intraplate / Crust thickness (15-25 km)", &tables());
        assert_eq!(t.regime, Regime::Intraplate);
        assert_eq!(t.crust, CrustType::Intermediate);
    }

    #[test]
    fn test_nan_prefix_stripped() {
        let t = normalize_tectonic("nan / Rift zone / Oceanic crust (< 15 km)", &tables());
        assert_eq!(t.regime, Regime::Rift);
        assert_eq!(t.crust, CrustType::Oceanic);
    }

    #[test]
    fn test_separator_without_spaces() {
        let t = normalize_tectonic("Subduction zone/Continental crust (> 25 km)", &tables());
        assert_eq!(t.regime, Regime::Subduction);
        assert_eq!(t.crust, CrustType::Continental);

        let t = normalize_tectonic("Intraplate/Oceanic crust (< 15 km)", &tables());
        assert_eq!(t.regime, Regime::Intraplate);
        assert_eq!(t.crust, CrustType::Oceanic);
    }

    #[test]
    fn test_regime_name_in_free_text() {
        let t = normalize_tectonic("Subduction-related volcanism", &tables());
        assert_eq!(t.regime, Regime::Subduction);

        let t = normalize_tectonic("Intraplate volcanism", &tables());
        assert_eq!(t.regime, Regime::Intraplate);
    }

    #[test]
    fn test_keyword_fallback() {
        let t = normalize_tectonic("Back-arc basin, western Pacific", &tables());
        assert_eq!(t.regime, Regime::Subduction);
    }

    #[test]
    fn test_named_feature_fallback() {
        let t = normalize_tectonic("Hawaii chain, central Pacific", &tables());
        assert_eq!(t.regime, Regime::Intraplate);
    }

    #[test]
    fn test_craton_keyword_sets_both_regime_and_crust() {
        let t = normalize_tectonic("Craton margin", &tables());
        assert_eq!(t.regime, Regime::Intraplate);
        assert_eq!(t.crust, CrustType::Continental);
    }

    #[test]
    fn test_sentinels_normalize_to_unknown() {
        for raw in ["unknown", "nan", "", "  ", "no data"] {
            let t = normalize_tectonic(raw, &tables());
            assert_eq!(t, NormalizedTectonic::unknown(), "raw = {raw:?}");
        }
    }

    #[test]
    fn test_unrecognized_is_unknown_not_error() {
        let t = normalize_tectonic("Somewhere volcanic", &tables());
        assert_eq!(t.regime, Regime::Unknown);
        assert_eq!(t.crust, CrustType::Unknown);
    }

    #[test]
    fn test_batch_dedup() {
        let settings = ["Rift zone / Oceanic crust (< 15 km)"; 3];
        let map = normalize_tectonic_batch(settings, &tables());
        assert_eq!(map.len(), 1);
    }
}
