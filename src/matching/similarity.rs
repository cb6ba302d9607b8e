// src/matching/similarity.rs - Character and token-set name similarity
use std::collections::BTreeSet;

use crate::config::MAX_PREFIX_SCALE;
use crate::matching::normalize::normalize_name;
use crate::models::matching::NameScores;

pub const DEFAULT_PREFIX_SCALE: f64 = 0.1;
const MAX_PREFIX_LENGTH: usize = 4;

/// Threshold reduction granted to pairs sharing a meaningful exact word.
pub const WORD_OVERLAP_BOOST: f64 = 0.10;
/// The boosted threshold never drops below this.
pub const WORD_OVERLAP_FLOOR: f64 = 0.70;
/// Minimum shared/union token ratio for the boost to apply.
pub const MIN_WORD_OVERLAP_RATIO: f64 = 0.25;
pub const MIN_TOKEN_LENGTH: usize = 2;

fn fold(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Jaro-Winkler similarity with a configurable prefix scaling factor.
///
/// Inputs are compared as given; callers fold case first. The arguments are
/// put in a canonical order so the score is symmetric.
pub fn jaro_winkler(a: &str, b: &str, prefix_scale: f64) -> f64 {
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    if a == b {
        return 1.0;
    }
    let jaro = strsim::jaro(a, b);
    let prefix_len = a
        .chars()
        .zip(b.chars())
        .take_while(|(ca, cb)| ca == cb)
        .take(MAX_PREFIX_LENGTH)
        .count();
    let scale = prefix_scale.clamp(0.0, MAX_PREFIX_SCALE);
    (jaro + prefix_len as f64 * scale * (1.0 - jaro)).min(1.0)
}

/// Case-folded Jaro-Winkler with the default prefix scale.
pub fn character_similarity(a: &str, b: &str) -> f64 {
    jaro_winkler(&fold(a), &fold(b), DEFAULT_PREFIX_SCALE)
}

/// Split into a sorted token set: lowercase, punctuation becomes whitespace,
/// single-character tokens are dropped unless numeric.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > 1 || token.chars().all(|c| c.is_numeric()))
        .map(str::to_string)
        .collect()
}

fn join_sorted<'a>(tokens: impl IntoIterator<Item = &'a String>) -> String {
    let mut parts: Vec<&str> = tokens.into_iter().map(String::as_str).collect();
    parts.sort_unstable();
    parts.join(" ")
}

/// Order-independent similarity over the two names' token sets.
pub fn token_set_similarity(a: &str, b: &str) -> f64 {
    token_set_similarity_with_scale(a, b, DEFAULT_PREFIX_SCALE)
}

pub fn token_set_similarity_with_scale(a: &str, b: &str, prefix_scale: f64) -> f64 {
    token_set_score(&tokenize(&fold(a)), &tokenize(&fold(b)), prefix_scale)
}

/// Token-set similarity over already tokenized names.
pub fn token_set_score(
    tokens_a: &BTreeSet<String>,
    tokens_b: &BTreeSet<String>,
    prefix_scale: f64,
) -> f64 {
    if tokens_a == tokens_b {
        return 1.0;
    }

    let intersection: Vec<&String> = tokens_a.intersection(tokens_b).collect();
    if intersection.is_empty() {
        // Token-sort fallback
        return jaro_winkler(&join_sorted(tokens_a), &join_sorted(tokens_b), prefix_scale);
    }

    let remainder_a: Vec<&String> = tokens_a.difference(tokens_b).collect();
    let remainder_b: Vec<&String> = tokens_b.difference(tokens_a).collect();

    let sorted_intersection = join_sorted(intersection.iter().copied());
    let combined_a = join_sorted(intersection.iter().chain(remainder_a.iter()).copied());
    let combined_b = join_sorted(intersection.iter().chain(remainder_b.iter()).copied());

    [
        jaro_winkler(&sorted_intersection, &combined_a, prefix_scale),
        jaro_winkler(&sorted_intersection, &combined_b, prefix_scale),
        jaro_winkler(&combined_a, &combined_b, prefix_scale),
    ]
    .into_iter()
    .fold(0.0, f64::max)
}

/// Exact-word overlap between two names: the number of shared tokens of at
/// least two characters and their share of the token union.
pub fn word_overlap(a: &str, b: &str) -> (usize, f64) {
    word_overlap_tokens(&tokenize(a), &tokenize(b))
}

pub fn word_overlap_tokens(tokens_a: &BTreeSet<String>, tokens_b: &BTreeSet<String>) -> (usize, f64) {
    let union_len = tokens_a.union(tokens_b).count();
    if union_len == 0 {
        return (0, 0.0);
    }
    let shared = tokens_a
        .intersection(tokens_b)
        .filter(|token| token.chars().count() >= MIN_TOKEN_LENGTH)
        .count();
    (shared, shared as f64 / union_len as f64)
}

/// Name threshold for a pair after the word-overlap boost. The boost never
/// raises a threshold that already sits below the floor.
pub fn adjusted_threshold(base_threshold: f64, a: &str, b: &str) -> f64 {
    boosted_threshold(base_threshold, word_overlap(a, b))
}

pub fn boosted_threshold(base_threshold: f64, (shared, ratio): (usize, f64)) -> f64 {
    if shared >= 1 && ratio >= MIN_WORD_OVERLAP_RATIO {
        (base_threshold - WORD_OVERLAP_BOOST)
            .max(WORD_OVERLAP_FLOOR)
            .min(base_threshold)
    } else {
        base_threshold
    }
}

/// Score two raw names with the default prefix scale.
pub fn score_names(a: &str, b: &str) -> NameScores {
    score_names_with_scale(a, b, DEFAULT_PREFIX_SCALE)
}

/// Character similarity runs on the normalized names, token-set similarity on
/// the case-folded originals; the combined score is the larger of the two.
pub fn score_names_with_scale(a: &str, b: &str, prefix_scale: f64) -> NameScores {
    let character_similarity =
        jaro_winkler(&normalize_name(a), &normalize_name(b), prefix_scale);
    let token_set_similarity = token_set_similarity_with_scale(a, b, prefix_scale);
    NameScores {
        character_similarity,
        token_set_similarity,
        combined: character_similarity.max(token_set_similarity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jaro_winkler_edge_cases() {
        assert_eq!(jaro_winkler("", "", 0.1), 1.0);
        assert_eq!(jaro_winkler("mill", "", 0.1), 0.0);
        assert_eq!(jaro_winkler("", "mill", 0.1), 0.0);
        assert_eq!(jaro_winkler("mill", "mill", 0.1), 1.0);
    }

    #[test]
    fn test_jaro_winkler_known_value() {
        // Classic MARTHA/MARHTA: jaro 0.944, prefix 3
        let score = jaro_winkler("martha", "marhta", 0.1);
        assert!((score - 0.9611).abs() < 0.001, "got {}", score);
    }

    #[test]
    fn test_prefix_scale_is_clamped() {
        let capped = jaro_winkler("martha", "marhta", 0.25);
        assert_eq!(jaro_winkler("martha", "marhta", 0.9), capped);
        let no_bonus = jaro_winkler("martha", "marhta", 0.0);
        assert!((no_bonus - strsim::jaro("martha", "marhta")).abs() < 1e-12);
        assert!(jaro_winkler("martha", "marhta", -1.0) <= capped);
    }

    #[test]
    fn test_character_similarity_folds_case() {
        assert_eq!(character_similarity("  Union Station ", "union station"), 1.0);
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("Union Station - Lockport, N.Y. 5");
        let expected: BTreeSet<String> = ["union", "station", "lockport", "5"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_token_set_word_order() {
        let score = token_set_similarity("Union Station - Lockport", "Lockport Union Train Station");
        assert!(score > 0.90, "got {}", score);
        assert_eq!(token_set_similarity("Mill Old", "old mill"), 1.0);
    }

    #[test]
    fn test_token_set_fallback_without_shared_words() {
        let score = token_set_similarity("Kodak Tower", "Xerox Square");
        assert!(score < 0.7, "got {}", score);
        assert_eq!(token_set_similarity("", "Kodak"), 0.0);
        assert_eq!(token_set_similarity("", ""), 1.0);
    }

    #[test]
    fn test_normalization_lifts_character_similarity() {
        let raw = character_similarity("PRR Station", "Pennsylvania Railroad Depot");
        assert!(raw < 0.85, "raw got {}", raw);
        let scores = score_names("PRR Station", "Pennsylvania Railroad Depot");
        assert!(scores.character_similarity > 0.85);
        assert!(scores.combined >= scores.character_similarity);
    }

    #[test]
    fn test_score_names_is_symmetric() {
        let pairs = [
            ("PRR Station", "Pennsylvania Railroad Depot"),
            ("Union Station - Lockport", "Lockport Union Train Station"),
            ("crate", "trace"),
            ("Dwayne", "Duane"),
            ("Old Mill", ""),
        ];
        for (a, b) in pairs {
            assert_eq!(score_names(a, b), score_names(b, a), "{} / {}", a, b);
        }
    }

    #[test]
    fn test_word_overlap() {
        let (shared, ratio) = word_overlap("lockport union station", "union freight house");
        assert_eq!(shared, 1);
        assert!((ratio - 0.2).abs() < 1e-12);
        assert_eq!(word_overlap("", ""), (0, 0.0));
    }

    #[test]
    fn test_adjusted_threshold() {
        // 2 shared out of 3 -> boosted
        let t = adjusted_threshold(0.85, "union station", "union station annex");
        assert!((t - 0.75).abs() < 1e-12);
        // Floor applies
        let t = adjusted_threshold(0.75, "union station", "union station annex");
        assert!((t - 0.70).abs() < 1e-12);
        // Already below the floor: left alone
        let t = adjusted_threshold(0.60, "union station", "union station annex");
        assert!((t - 0.60).abs() < 1e-12);
        // No shared words
        assert_eq!(adjusted_threshold(0.85, "kodak tower", "xerox square"), 0.85);
    }
}
