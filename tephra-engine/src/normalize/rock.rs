//! Rock type normalization.

use smallvec::SmallVec;

use super::is_sentinel;
use super::tables::MatchTables;

/// Canonical rock-type alternatives for one volcano record.
pub type RockList = SmallVec<[String; 4]>;

/// Normalize one free-text rock type into its canonical name.
///
/// Uppercase and trim; sentinels return `None`; internal hyphens are
/// stripped except in protected two-part compound names; historic
/// spellings map to their modern canonical name. Idempotent: a value
/// that is already canonical comes back unchanged.
pub fn normalize_rock(raw: &str, tables: &MatchTables) -> Option<String> {
    let text = raw.trim().to_uppercase();
    if is_sentinel(&text) {
        return None;
    }

    let dehyphenated = if tables.is_protected_compound(&text) {
        text
    } else {
        text.replace('-', "")
    };

    let canonical = tables
        .canonical_rock_spelling(&dehyphenated)
        .map(str::to_string)
        .unwrap_or(dehyphenated);

    Some(canonical)
}

/// Normalize a volcano rock-type field, which may list several
/// alternatives separated by `/`. Each alternative is normalized
/// independently; sentinels and duplicates are dropped.
pub fn normalize_rock_list(raw: &str, tables: &MatchTables) -> RockList {
    let mut out = RockList::new();
    for part in raw.split('/') {
        if let Some(rock) = normalize_rock(part, tables) {
            if !out.contains(&rock) {
                out.push(rock);
            }
        }
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
    fn test_uppercase_and_trim() {
        assert_eq!(
            normalize_rock("  basalt ", &tables()),
            Some("BASALT".to_string())
        );
    }

    #[test]
    fn test_idempotent_on_canonical() {
        let once = normalize_rock("Trachybasalt", &tables()).unwrap();
        let twice = normalize_rock(&once, &tables()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sentinels_are_absent() {
        for raw in ["no data", "unknown", "nan", "", "  "] {
            assert_eq!(normalize_rock(raw, &tables()), None, "raw = {raw:?}");
        }
    }

    #[test]
    fn test_hyphen_stripped() {
        assert_eq!(
            normalize_rock("Trachy-basalt", &tables()),
            Some("TRACHYBASALT".to_string())
        );
    }

    #[test]
    fn test_protected_compound_keeps_hyphen() {
        assert_eq!(
            normalize_rock("Phono-tephrite", &tables()),
            Some("PHONO-TEPHRITE".to_string())
        );
        assert_eq!(
            normalize_rock("Tephri-phonolite", &tables()),
            Some("TEPHRI-PHONOLITE".to_string())
        );
    }

    #[test]
    fn test_historic_spelling_mapped() {
        assert_eq!(
            normalize_rock("Liparite", &tables()),
            Some("RHYOLITE".to_string())
        );
    }

    #[test]
    fn test_rock_list_split_and_dedup() {
        let list = normalize_rock_list("Basalt / Andesite / basalt", &tables());
        assert_eq!(list.as_slice(), ["BASALT".to_string(), "ANDESITE".to_string()]);
    }

    #[test]
    fn test_rock_list_drops_sentinels() {
        let list = normalize_rock_list("Basalt / no data", &tables());
        assert_eq!(list.as_slice(), ["BASALT".to_string()]);
    }

    #[test]
    fn test_rock_list_all_sentinels_is_empty() {
        let list = normalize_rock_list("unknown / nan", &tables());
        assert!(list.is_empty());
    }
}
