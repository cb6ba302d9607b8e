// src/matching/blocking.rs - Vetoes for names that disagree on a distinguishing marker
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::matching::normalize::normalize_name;
use crate::models::matching::{BlockingCategory, BlockingConflict};

pub const DIRECTIONAL_WORDS: [&str; 12] = [
    "north", "south", "east", "west", "upper", "lower", "inner", "outer", "northeast",
    "northwest", "southeast", "southwest",
];

pub const TEMPORAL_WORDS: [&str; 7] =
    ["old", "new", "former", "current", "original", "modern", "historic"];

/// Spelled-out ordinals paired with their numeric suffix forms.
pub const ORDINAL_WORDS: [(&str, &str); 12] = [
    ("first", "1st"),
    ("second", "2nd"),
    ("third", "3rd"),
    ("fourth", "4th"),
    ("fifth", "5th"),
    ("sixth", "6th"),
    ("seventh", "7th"),
    ("eighth", "8th"),
    ("ninth", "9th"),
    ("tenth", "10th"),
    ("eleventh", "11th"),
    ("twelfth", "12th"),
];

/// Words that take an identifier after them, as in "building 4" or "lot b".
pub const IDENTIFIER_KEYWORDS: [&str; 10] = [
    "building", "unit", "wing", "phase", "block", "lot", "plant", "shaft", "pier", "section",
];

static DIRECTIONAL_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| DIRECTIONAL_WORDS.iter().copied().collect());
static TEMPORAL_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| TEMPORAL_WORDS.iter().copied().collect());
static IDENTIFIER_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| IDENTIFIER_KEYWORDS.iter().copied().collect());

/// Blocking markers found in one name, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockingMarkers {
    markers: BTreeMap<BlockingCategory, BTreeSet<String>>,
}

impl BlockingMarkers {
    pub fn get(&self, category: BlockingCategory) -> Option<&BTreeSet<String>> {
        self.markers.get(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    fn insert(&mut self, category: BlockingCategory, token: String) {
        self.markers.entry(category).or_default().insert(token);
    }

    fn extend(&mut self, other: BlockingMarkers) {
        for (category, tokens) in other.markers {
            self.markers.entry(category).or_default().extend(tokens);
        }
    }
}

fn blocking_words(name: &str) -> Vec<String> {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Canonical ordinal for a word, so that "1st" and "first" agree.
fn canonical_ordinal(word: &str) -> Option<String> {
    if let Some((spelled, _)) = ORDINAL_WORDS
        .iter()
        .find(|(spelled, numeric)| *spelled == word || *numeric == word)
    {
        return Some(spelled.to_string());
    }
    let digits_end = word.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let (digits, suffix) = word.split_at(digits_end);
    matches!(suffix, "st" | "nd" | "rd" | "th").then(|| format!("{}{}", digits, suffix))
}

/// Scan a raw name for directional, temporal, ordinal and identifier markers.
pub fn extract_markers(name: &str) -> BlockingMarkers {
    let words = blocking_words(name);
    let mut markers = BlockingMarkers::default();

    for (i, word) in words.iter().enumerate() {
        if DIRECTIONAL_SET.contains(word.as_str()) {
            markers.insert(BlockingCategory::Directional, word.clone());
        }
        if TEMPORAL_SET.contains(word.as_str()) {
            markers.insert(BlockingCategory::Temporal, word.clone());
        }
        if let Some(ordinal) = canonical_ordinal(word) {
            markers.insert(BlockingCategory::Ordinal, ordinal);
        }
        if IDENTIFIER_SET.contains(word.as_str()) {
            if let Some(value) = words.get(i + 1) {
                markers.insert(BlockingCategory::Identifier, format!("{} {}", word, value));
            }
        }
    }
    markers
}

/// Markers of the raw name together with those of its normalized form, so
/// abbreviations like "N" or "Upr" count as the words they expand to.
pub fn extract_name_markers(name: &str) -> BlockingMarkers {
    let mut markers = extract_markers(name);
    markers.extend(extract_markers(&normalize_name(name)));
    markers
}

/// First conflict between two names, checking categories in precedence order.
/// Names conflict in a category when both carry markers of it and the marker
/// sets differ; a marker on only one side never conflicts.
pub fn detect_conflict(name_a: &str, name_b: &str) -> Option<BlockingConflict> {
    let markers_a = extract_name_markers(name_a);
    if markers_a.is_empty() {
        return None;
    }
    let markers_b = extract_name_markers(name_b);
    conflict_between(&markers_a, &markers_b)
}

pub fn conflict_between(
    markers_a: &BlockingMarkers,
    markers_b: &BlockingMarkers,
) -> Option<BlockingConflict> {
    BlockingCategory::ALL.iter().find_map(|&category| {
        let set_a = markers_a.get(category)?;
        let set_b = markers_b.get(category)?;
        if set_a == set_b {
            return None;
        }
        let first = set_a
            .difference(set_b)
            .next()
            .or_else(|| set_a.iter().next())?;
        let second = set_b
            .difference(set_a)
            .next()
            .or_else(|| set_b.iter().next())?;
        Some(BlockingConflict {
            category,
            first: first.clone(),
            second: second.clone(),
        })
    })
}
