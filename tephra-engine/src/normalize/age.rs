//! Geological age normalization.

use tephra_core::types::GeologicalAgeText;

use super::is_sentinel;
use super::types::{AgeClass, AgePrefix, NormalizedAge};

/// Era keywords recognized as Neogene-class (younger Cenozoic, pre-Quaternary).
const NEOGENE_KEYWORDS: &[&str] = &["NEOGENE", "MIOCENE", "PLIOCENE", "TERTIARY"];

/// Era keywords older than Neogene. Anything recognized here scores as
/// implausibly old for an active association.
const OLDER_KEYWORDS: &[&str] = &[
    "PALEOGENE",
    "EOCENE",
    "OLIGOCENE",
    "PALEOCENE",
    "CRETACEOUS",
    "JURASSIC",
    "TRIASSIC",
    "MESOZOIC",
    "PERMIAN",
    "CARBONIFEROUS",
    "DEVONIAN",
    "SILURIAN",
    "ORDOVICIAN",
    "CAMBRIAN",
    "PALEOZOIC",
    "PRECAMBRIAN",
    "PROTEROZOIC",
    "ARCHEAN",
];

/// Normalize a free-text geological age into an era class plus an
/// optional precision prefix. Returns `None` when the era text is a
/// sentinel or matches no known era — absent, not an error.
pub fn normalize_age(age: &GeologicalAgeText) -> Option<NormalizedAge> {
    let era = canonical_era_text(&age.era_text);
    if is_sentinel(&era) {
        return None;
    }

    let class = classify_era(&era)?;
    let prefix = age
        .era_prefix
        .as_deref()
        .and_then(|p| classify_prefix(&p.trim().to_uppercase()));

    Some(NormalizedAge { class, prefix })
}

/// Uppercase and strip punctuation that upstream sources sprinkle into
/// era text ("Holocene?", "Pleistocene(?)").
fn canonical_era_text(raw: &str) -> String {
    raw.trim()
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

fn classify_era(era: &str) -> Option<AgeClass> {
    if era.contains("HOLOCENE") || era.contains("RECENT") {
        return Some(AgeClass::Holocene);
    }
    if era.contains("PLEISTOCENE") || era.contains("QUATERNARY") {
        return Some(AgeClass::Pleistocene);
    }
    if NEOGENE_KEYWORDS.iter().any(|k| era.contains(k)) {
        return Some(AgeClass::Neogene);
    }
    if OLDER_KEYWORDS.iter().any(|k| era.contains(k)) {
        return Some(AgeClass::Older);
    }
    None
}

fn classify_prefix(prefix: &str) -> Option<AgePrefix> {
    if prefix.contains("EARLY") || prefix.contains("LOWER") {
        return Some(AgePrefix::Early);
    }
    if prefix.contains("LATE") || prefix.contains("UPPER") || prefix.contains("RECENT") {
        return Some(AgePrefix::Late);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age(era: &str, prefix: Option<&str>) -> GeologicalAgeText {
        GeologicalAgeText::new(era, prefix.map(str::to_string))
    }

    #[test]
    fn test_holocene_and_recent() {
        assert_eq!(
            normalize_age(&age("Holocene", None)).unwrap().class,
            AgeClass::Holocene
        );
        assert_eq!(
            normalize_age(&age("Recent", None)).unwrap().class,
            AgeClass::Holocene
        );
    }

    #[test]
    fn test_punctuation_stripped() {
        assert_eq!(
            normalize_age(&age("Pleistocene(?)", None)).unwrap().class,
            AgeClass::Pleistocene
        );
    }

    #[test]
    fn test_neogene_class() {
        for era in ["Neogene", "Miocene", "Pliocene", "Tertiary"] {
            assert_eq!(
                normalize_age(&age(era, None)).unwrap().class,
                AgeClass::Neogene,
                "era = {era}"
            );
        }
    }

    #[test]
    fn test_older_eras() {
        for era in ["Cretaceous", "Jurassic", "Precambrian", "Eocene"] {
            assert_eq!(
                normalize_age(&age(era, None)).unwrap().class,
                AgeClass::Older,
                "era = {era}"
            );
        }
    }

    #[test]
    fn test_prefix_kept_separately() {
        let n = normalize_age(&age("Pleistocene", Some("Late"))).unwrap();
        assert_eq!(n.class, AgeClass::Pleistocene);
        assert_eq!(n.prefix, Some(AgePrefix::Late));

        let n = normalize_age(&age("Jurassic", Some("Lower"))).unwrap();
        assert_eq!(n.class, AgeClass::Older);
        assert_eq!(n.prefix, Some(AgePrefix::Early));
    }

    #[test]
    fn test_sentinel_and_unrecognized_are_absent() {
        assert!(normalize_age(&age("unknown", None)).is_none());
        assert!(normalize_age(&age("nan", None)).is_none());
        assert!(normalize_age(&age("", None)).is_none());
        assert!(normalize_age(&age("Volcaniclastic", None)).is_none());
    }
}
