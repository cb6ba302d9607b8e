// src/matching/normalize.rs - Lexical normalization of place names
use log::warn;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

use crate::matching::aliases::{PERIOD_ABBREVIATIONS, PHRASE_ALIASES, WORD_ALIASES};

pub const LEADING_ARTICLES: [&str; 3] = ["the", "a", "an"];

static ARTICLE_REGEX: Lazy<Option<Regex>> = Lazy::new(|| {
    compile_pattern(&format!(r"^(?:{})\s+", LEADING_ARTICLES.join("|")))
});

static PERIOD_REGEX: Lazy<Option<Regex>> = Lazy::new(|| {
    let alternation = PERIOD_ABBREVIATIONS
        .iter()
        .map(|(abbr, _)| regex::escape(abbr))
        .collect::<Vec<_>>()
        .join("|");
    compile_pattern(&format!(r"(?i)\b({})\.", alternation))
});

static PERIOD_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PERIOD_ABBREVIATIONS.iter().copied().collect());

// Alternation is leftmost-first, so sorting longest first keeps a short phrase
// from shadowing a longer one that starts at the same position.
static PHRASE_REGEX: Lazy<Option<Regex>> = Lazy::new(|| {
    let mut phrases: Vec<&str> = PHRASE_ALIASES.iter().map(|(phrase, _)| *phrase).collect();
    phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let alternation = phrases
        .iter()
        .map(|phrase| regex::escape(phrase).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    compile_pattern(&format!(r"(?i)\b(?:{})\b", alternation))
});

static PHRASE_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PHRASE_ALIASES.iter().copied().collect());

static WORD_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| WORD_ALIASES.iter().copied().collect());

fn compile_pattern(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Invalid normalization pattern: '{}'. Error: {}", pattern, e);
            None
        }
    }
}

/// Normalize a place name into its canonical lowercase form.
///
/// Steps run in a fixed order, each on the output of the previous one:
/// lowercase and trim, strip one leading article, expand period-terminated
/// abbreviations, expand multi-word phrases, expand single-word aliases,
/// collapse whitespace.
pub fn normalize_name(name: &str) -> String {
    let mut normalized = name.to_lowercase().trim().to_string();
    if normalized.is_empty() {
        return normalized;
    }

    normalized = strip_leading_article(&normalized);
    normalized = expand_period_abbreviations(&normalized);
    normalized = expand_phrase_aliases(&normalized);
    normalized = expand_word_aliases(&normalized);

    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_leading_article(text: &str) -> String {
    match ARTICLE_REGEX.as_ref() {
        Some(re) => re.replacen(text, 1, "").into_owned(),
        None => text.to_string(),
    }
}

fn expand_period_abbreviations(text: &str) -> String {
    let Some(re) = PERIOD_REGEX.as_ref() else {
        return text.to_string();
    };
    re.replace_all(text, |caps: &Captures| {
        let abbr = caps[1].to_lowercase();
        match PERIOD_MAP.get(abbr.as_str()) {
            Some(expansion) => format!("{} ", expansion),
            None => caps[0].to_string(),
        }
    })
    .into_owned()
}

fn expand_phrase_aliases(text: &str) -> String {
    let Some(re) = PHRASE_REGEX.as_ref() else {
        return text.to_string();
    };
    re.replace_all(text, |caps: &Captures| {
        let key = caps[0]
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        match PHRASE_MAP.get(key.as_str()) {
            Some(expansion) => expansion.to_string(),
            None => caps[0].to_string(),
        }
    })
    .into_owned()
}

fn expand_word_aliases(text: &str) -> String {
    text.split_whitespace()
        .map(|token| {
            let (core, trailing) = split_trailing_punctuation(token);
            match WORD_MAP.get(core) {
                Some(expansion) => format!("{}{}", expansion, trailing),
                None => token.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split `token` into its body and any punctuation trailing the last
/// alphanumeric character. All-punctuation tokens (`&`) are returned whole.
fn split_trailing_punctuation(token: &str) -> (&str, &str) {
    match token.char_indices().rev().find(|(_, c)| c.is_alphanumeric()) {
        Some((idx, c)) => token.split_at(idx + c.len_utf8()),
        None => (token, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_railroad_abbreviation() {
        assert_eq!(normalize_name("PRR Station"), "pennsylvania railroad station");
        assert_eq!(
            normalize_name("Pennsylvania Railroad Depot"),
            "pennsylvania railroad station"
        );
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_leading_article_stripped_once() {
        assert_eq!(normalize_name("The Old Mill"), "old mill");
        assert_eq!(normalize_name("An Old Barn"), "old barn");
        assert_eq!(normalize_name("The The"), "the");
        // Not an article when it is the whole name
        assert_eq!(normalize_name("The"), "the");
        // Only leading position counts
        assert_eq!(normalize_name("Over The Hill"), "over the hill");
    }

    #[test]
    fn test_period_abbreviations_before_word_aliases() {
        assert_eq!(normalize_name("St. Mary's Church"), "saint mary's church");
        assert_eq!(normalize_name("Main St"), "main street");
        assert_eq!(normalize_name("Mt. Hope Cemetery"), "mount hope cemetery");
        assert_eq!(normalize_name("Acme Co. Warehouse"), "acme company warehouse");
        assert_eq!(normalize_name("Erie Co Home"), "erie county home");
    }

    #[test]
    fn test_phrase_aliases() {
        assert_eq!(normalize_name("Lockport Train Station"), "lockport station");
        assert_eq!(normalize_name("Old Grist  Mill"), "old gristmill");
        assert_eq!(normalize_name("Willard Insane Asylum"), "willard state hospital");
        assert_eq!(normalize_name("B & O Freight House"), "baltimore and ohio freight station");
    }

    #[test]
    fn test_phrases_expand_in_context() {
        assert_eq!(normalize_name("Eastern State Penitentiary"), "eastern penitentiary");
        assert_eq!(normalize_name("Life Saving Station"), "lifesaving station");
    }

    #[test]
    fn test_word_aliases_keep_trailing_punctuation() {
        assert_eq!(normalize_name("PRR, Main Line"), "pennsylvania railroad, main line");
        assert_eq!(normalize_name("Smith Bros Mfg"), "smith brothers manufacturing");
        assert_eq!(normalize_name("B&O Depot"), "baltimore and ohio station");
        assert_eq!(normalize_name("Tom & Jerry"), "tom and jerry");
    }

    #[test]
    fn test_split_trailing_punctuation() {
        assert_eq!(split_trailing_punctuation("prr,"), ("prr", ","));
        assert_eq!(split_trailing_punctuation("b&o"), ("b&o", ""));
        assert_eq!(split_trailing_punctuation("&"), ("&", ""));
        assert_eq!(split_trailing_punctuation("co.);"), ("co", ".);"));
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let name = "The PRR  Sta. at Mt. Union, PA";
        assert_eq!(normalize_name(name), normalize_name(name));
        assert_eq!(
            normalize_name(name),
            "pennsylvania railroad station at mount union, pennsylvania"
        );
    }
}
