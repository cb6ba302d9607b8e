// src/matching/generic.rs - Names too common to trust without close GPS agreement
use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::matching::normalize::LEADING_ARTICLES;
use crate::matching::similarity::tokenize;

pub const GENERIC_WORDS: [&str; 27] = [
    "house", "church", "factory", "school", "mill", "barn", "station", "hospital", "hotel",
    "farm", "cemetery", "bridge", "mine", "warehouse", "store", "theater", "prison", "asylum",
    "tower", "office", "plant", "building", "depot", "hall", "chapel", "motel", "mall",
];

/// Extra words only the suggestion filter treats as generic.
pub const SUGGESTION_GENERIC_WORDS: [&str; 7] =
    ["park", "ruins", "site", "home", "library", "tunnel", "dam"];

pub const REGION_ABBREVIATIONS: [&str; 63] = [
    "al", "ak", "az", "ar", "ca", "co", "ct", "de", "fl", "ga", "hi", "id", "il", "in", "ia",
    "ks", "ky", "la", "me", "md", "ma", "mi", "mn", "ms", "mo", "mt", "ne", "nv", "nh", "nj",
    "nm", "ny", "nc", "nd", "oh", "ok", "or", "pa", "ri", "sc", "sd", "tn", "tx", "ut", "vt",
    "va", "wa", "wv", "wi", "wy", "dc", "nyc", "sf", "philly", "chi", "pgh", "buf", "roc",
    "syr", "det", "cle", "atl", "bos",
];

static GENERIC_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| GENERIC_WORDS.iter().copied().collect());

static SUGGESTION_GENERIC_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    GENERIC_WORDS
        .iter()
        .chain(SUGGESTION_GENERIC_WORDS.iter())
        .copied()
        .collect()
});

static REGION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| REGION_ABBREVIATIONS.iter().copied().collect());

fn significant_tokens(name: &str) -> Vec<String> {
    let mut words: Vec<String> = name
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if words.len() > 1 && LEADING_ARTICLES.contains(&words[0].as_str()) {
        words.remove(0);
    }
    tokenize(&words.join(" ")).into_iter().collect()
}

/// Whether a name is too generic to match on without close GPS agreement:
/// a single generic word, or a generic word plus a region abbreviation.
/// Empty names count as generic.
pub fn is_generic_name(name: &str) -> bool {
    let tokens = significant_tokens(name);
    match tokens.as_slice() {
        [] => true,
        [only] => GENERIC_SET.contains(only.as_str()),
        [first, second] => {
            (GENERIC_SET.contains(first.as_str()) && REGION_SET.contains(second.as_str()))
                || (GENERIC_SET.contains(second.as_str()) && REGION_SET.contains(first.as_str()))
        }
        _ => false,
    }
}

/// Stricter policy for suggestion lists: up to three tokens made only of
/// generic words and region abbreviations, with at least one generic word.
/// Uses the larger suggestion word set; not interchangeable with
/// [`is_generic_name`].
pub fn is_suggestion_filtered(name: &str) -> bool {
    let tokens = significant_tokens(name);
    if tokens.is_empty() || tokens.len() > 3 {
        return false;
    }
    let generic_count = tokens
        .iter()
        .filter(|t| SUGGESTION_GENERIC_SET.contains(t.as_str()))
        .count();
    generic_count >= 1
        && tokens.iter().all(|t| {
            SUGGESTION_GENERIC_SET.contains(t.as_str()) || REGION_SET.contains(t.as_str())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_generic_word() {
        assert!(is_generic_name("Church"));
        assert!(is_generic_name("  FACTORY "));
        assert!(is_generic_name("The Mill"));
        assert!(!is_generic_name("Kodak"));
    }

    #[test]
    fn test_generic_plus_region() {
        assert!(is_generic_name("School NY"));
        assert!(is_generic_name("PA Station"));
        assert!(!is_generic_name("School Rochester"));
        assert!(!is_generic_name("Church School"));
    }

    #[test]
    fn test_longer_names_are_not_generic() {
        assert!(!is_generic_name("Old Stone Church"));
        assert!(!is_generic_name("Church NY USA"));
    }

    #[test]
    fn test_empty_names_are_generic() {
        assert!(is_generic_name(""));
        assert!(is_generic_name("   "));
        assert!(!is_generic_name("Kodak Tower"));
    }

    #[test]
    fn test_suggestion_filter_is_a_separate_policy() {
        // Only in the suggestion word set
        assert!(is_suggestion_filtered("Park"));
        assert!(!is_generic_name("Park"));
        // Three tokens of generic and region words
        assert!(is_suggestion_filtered("Church School NY"));
        assert!(!is_generic_name("Church School NY"));
        // Needs at least one generic word
        assert!(!is_suggestion_filtered("NY PA"));
        assert!(!is_suggestion_filtered("Church School Hall Barn"));
        assert!(!is_suggestion_filtered(""));
        assert!(!is_suggestion_filtered("Kodak Park"));
    }
}
