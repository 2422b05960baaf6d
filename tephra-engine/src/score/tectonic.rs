//! Tectonic dimension scorer.

use crate::normalize::types::{CrustType, NormalizedTectonic, Regime};

use super::types::DimensionScore;

/// Score tectonic compatibility between sample and volcano.
///
/// Absent if either side's regime is unknown. Otherwise
/// `regime_compatibility × crust_modifier`.
pub fn score_tectonic(
    sample: &NormalizedTectonic,
    volcano: &NormalizedTectonic,
) -> DimensionScore {
    if !sample.regime.is_known() || !volcano.regime.is_known() {
        return DimensionScore::Absent;
    }

    let compat = regime_compatibility(sample.regime, volcano.regime);
    let modifier = crust_modifier(sample.crust, volcano.crust);
    DimensionScore::from_value(compat * modifier)
}

/// Fixed compatibility matrix, symmetric by construction: the pair is
/// canonicalized before lookup, so a table edit cannot break symmetry.
pub fn regime_compatibility(a: Regime, b: Regime) -> f64 {
    if a == b {
        return 1.0;
    }
    match unordered(a, b) {
        (Regime::Rift, Regime::Intraplate) => 0.7,
        _ => 0.0,
    }
}

/// Crust modifier: 1.0 when both known and equal, 0.75 when both known
/// and different, 0.85 when either side is unknown.
pub fn crust_modifier(a: CrustType, b: CrustType) -> f64 {
    if !a.is_known() || !b.is_known() {
        0.85
    } else if a == b {
        1.0
    } else {
        0.75
    }
}

fn unordered(a: Regime, b: Regime) -> (Regime, Regime) {
    if rank(a) <= rank(b) {
        (a, b)
    } else {
        (b, a)
    }
}

fn rank(r: Regime) -> u8 {
    match r {
        Regime::Subduction => 0,
        Regime::Rift => 1,
        Regime::Intraplate => 2,
        Regime::Unknown => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(regime: Regime, crust: CrustType) -> NormalizedTectonic {
        NormalizedTectonic { regime, crust }
    }

    #[test]
    fn test_same_regime_scores_one() {
        for regime in [Regime::Subduction, Regime::Rift, Regime::Intraplate] {
            assert_eq!(regime_compatibility(regime, regime), 1.0);
        }
    }

    #[test]
    fn test_rift_intraplate_symmetric() {
        assert_eq!(regime_compatibility(Regime::Rift, Regime::Intraplate), 0.7);
        assert_eq!(regime_compatibility(Regime::Intraplate, Regime::Rift), 0.7);
    }

    #[test]
    fn test_other_cross_regime_pairs_score_zero() {
        assert_eq!(
            regime_compatibility(Regime::Subduction, Regime::Rift),
            0.0
        );
        assert_eq!(
            regime_compatibility(Regime::Subduction, Regime::Intraplate),
            0.0
        );
    }

    #[test]
    fn test_unknown_regime_is_absent() {
        let s = known(Regime::Unknown, CrustType::Continental);
        let v = known(Regime::Subduction, CrustType::Continental);
        assert_eq!(score_tectonic(&s, &v), DimensionScore::Absent);
        assert_eq!(score_tectonic(&v, &s), DimensionScore::Absent);
    }

    #[test]
    fn test_crust_modifier_values() {
        assert_eq!(
            crust_modifier(CrustType::Continental, CrustType::Continental),
            1.0
        );
        assert_eq!(
            crust_modifier(CrustType::Continental, CrustType::Oceanic),
            0.75
        );
        assert_eq!(
            crust_modifier(CrustType::Unknown, CrustType::Oceanic),
            0.85
        );
        assert_eq!(
            crust_modifier(CrustType::Unknown, CrustType::Unknown),
            0.85
        );
    }

    #[test]
    fn test_full_match() {
        let s = known(Regime::Subduction, CrustType::Continental);
        let v = known(Regime::Subduction, CrustType::Continental);
        assert_eq!(score_tectonic(&s, &v), DimensionScore::Present(1.0));
    }

    #[test]
    fn test_mismatch_is_explicit_zero_not_absent() {
        let s = known(Regime::Subduction, CrustType::Continental);
        let v = known(Regime::Rift, CrustType::Continental);
        assert_eq!(score_tectonic(&s, &v), DimensionScore::Present(0.0));
    }

    #[test]
    fn test_compatible_regimes_with_differing_crust() {
        let s = known(Regime::Rift, CrustType::Oceanic);
        let v = known(Regime::Intraplate, CrustType::Continental);
        let score = score_tectonic(&s, &v).value().unwrap();
        assert!((score - 0.7 * 0.75).abs() < 1e-12);
    }
}
