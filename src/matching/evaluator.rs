// src/matching/evaluator.rs - Per-pair match verdicts
use std::collections::BTreeSet;

use crate::config::MatchConfig;
use crate::matching::blocking::{conflict_between, extract_name_markers, BlockingMarkers};
use crate::matching::generic::is_generic_name;
use crate::matching::geo::calculate_distance;
use crate::matching::normalize::normalize_name;
use crate::matching::similarity::{
    boosted_threshold, jaro_winkler, token_set_score, tokenize, word_overlap_tokens,
};
use crate::models::core::PointRecord;
use crate::models::matching::{MatchType, NameScores, PairwiseMatchResult};

pub const CONFIDENCE_GPS_AND_NAME: f64 = 95.0;
pub const CONFIDENCE_STRONG_NAME: f64 = 80.0;
pub const CONFIDENCE_GPS_WITH_PARTIAL_NAME: f64 = 75.0;
pub const CONFIDENCE_GENERIC_GPS: f64 = 70.0;
pub const CONFIDENCE_MODERATE_NAME: f64 = 65.0;
pub const CONFIDENCE_UNNAMED_GPS: f64 = 60.0;

pub const STRONG_NAME_SCORE: f64 = 0.95;
pub const MODERATE_NAME_SCORE: f64 = 0.90;
pub const PARTIAL_NAME_SCORE: f64 = 0.70;

/// Everything the evaluator needs from one name, computed once per record
/// instead of once per pair.
#[derive(Debug, Clone)]
pub struct PreparedName {
    pub is_empty: bool,
    pub normalized: String,
    /// Tokens of the case-folded original name
    pub raw_tokens: BTreeSet<String>,
    /// Tokens of the normalized name
    pub normalized_tokens: BTreeSet<String>,
    pub is_generic: bool,
    pub markers: BlockingMarkers,
}

impl PreparedName {
    pub fn new(name: &str) -> Self {
        let raw = name.trim();
        let normalized = normalize_name(raw);
        Self {
            is_empty: raw.is_empty(),
            raw_tokens: tokenize(raw),
            normalized_tokens: tokenize(&normalized),
            is_generic: is_generic_name(raw),
            markers: extract_name_markers(raw),
            normalized,
        }
    }

    pub fn from_record(record: &PointRecord) -> Self {
        Self::new(record.name_or_empty())
    }
}

/// Name scores between two prepared names.
pub fn score_prepared(a: &PreparedName, b: &PreparedName, prefix_scale: f64) -> NameScores {
    let character_similarity = jaro_winkler(&a.normalized, &b.normalized, prefix_scale);
    let token_set_similarity = token_set_score(&a.raw_tokens, &b.raw_tokens, prefix_scale);
    NameScores {
        character_similarity,
        token_set_similarity,
        combined: character_similarity.max(token_set_similarity),
    }
}

/// Evaluate two records. The result refers to them as indices 0 and 1.
pub fn evaluate_pair(a: &PointRecord, b: &PointRecord, config: &MatchConfig) -> PairwiseMatchResult {
    let prepared_a = PreparedName::from_record(a);
    let prepared_b = PreparedName::from_record(b);
    evaluate_prepared(0, a, &prepared_a, 1, b, &prepared_b, config)
}

/// Decide the match type and confidence for one pair. Rules are applied in a
/// fixed order and the first one that applies wins.
#[allow(clippy::too_many_arguments)]
pub fn evaluate_prepared(
    index_a: usize,
    record_a: &PointRecord,
    name_a: &PreparedName,
    index_b: usize,
    record_b: &PointRecord,
    name_b: &PreparedName,
    config: &MatchConfig,
) -> PairwiseMatchResult {
    let distance_meters = calculate_distance(
        record_a.latitude,
        record_a.longitude,
        record_b.latitude,
        record_b.longitude,
    );
    let scores = score_prepared(name_a, name_b, config.effective_prefix_scale());
    let name_threshold = if config.word_overlap_boost {
        boosted_threshold(
            config.name_threshold,
            word_overlap_tokens(&name_a.normalized_tokens, &name_b.normalized_tokens),
        )
    } else {
        config.name_threshold
    };
    let blocking_conflict = conflict_between(&name_a.markers, &name_b.markers);
    let is_generic = name_a.is_generic || name_b.is_generic;

    let names_present = !name_a.is_empty && !name_b.is_empty;
    let gps_match = distance_meters <= config.gps_threshold_meters;
    let name_match = names_present && scores.combined >= name_threshold;

    let (match_type, confidence) = if blocking_conflict.is_some() {
        (MatchType::None, 0.0)
    } else if gps_match && name_match {
        (MatchType::Both, CONFIDENCE_GPS_AND_NAME)
    } else if gps_match && is_generic && distance_meters <= config.generic_gps_threshold_meters {
        (MatchType::Gps, CONFIDENCE_GENERIC_GPS)
    } else if gps_match && name_a.is_empty && name_b.is_empty {
        (MatchType::Gps, CONFIDENCE_UNNAMED_GPS)
    } else if name_match && !config.require_gps_match {
        if scores.combined >= STRONG_NAME_SCORE {
            (MatchType::Name, CONFIDENCE_STRONG_NAME)
        } else if scores.combined >= MODERATE_NAME_SCORE {
            (MatchType::Name, CONFIDENCE_MODERATE_NAME)
        } else {
            (MatchType::None, 0.0)
        }
    } else if gps_match && names_present && scores.combined >= PARTIAL_NAME_SCORE {
        (MatchType::Both, CONFIDENCE_GPS_WITH_PARTIAL_NAME)
    } else {
        (MatchType::None, 0.0)
    };

    PairwiseMatchResult {
        record_a: index_a,
        record_b: index_b,
        distance_meters,
        name_similarity: scores.combined,
        token_set_similarity: scores.token_set_similarity,
        name_threshold,
        blocking_conflict,
        is_generic,
        match_type,
        confidence,
    }
}
