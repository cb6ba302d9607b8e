// src/models/matching.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which evidence produced a pairwise match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Gps,
    Name,
    Both,
    None,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Gps => "gps",
            MatchType::Name => "name",
            MatchType::Both => "both",
            MatchType::None => "none",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token categories that veto a match when two names disagree on them.
/// Declaration order is the order conflicts are checked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockingCategory {
    Directional,
    Temporal,
    Ordinal,
    Identifier,
}

impl BlockingCategory {
    pub const ALL: [BlockingCategory; 4] = [
        BlockingCategory::Directional,
        BlockingCategory::Temporal,
        BlockingCategory::Ordinal,
        BlockingCategory::Identifier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockingCategory::Directional => "directional",
            BlockingCategory::Temporal => "temporal",
            BlockingCategory::Ordinal => "ordinal",
            BlockingCategory::Identifier => "identifier",
        }
    }
}

impl fmt::Display for BlockingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockingConflict {
    pub category: BlockingCategory,
    /// Offending token from the first name
    pub first: String,
    /// Offending token from the second name
    pub second: String,
}

impl fmt::Display for BlockingConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} conflict: '{}' vs '{}'", self.category, self.first, self.second)
    }
}

/// Output of the name scorer for one pair of names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NameScores {
    /// Jaro-Winkler over the normalized names
    pub character_similarity: f64,
    /// Order-independent token-set similarity over the case-folded names
    pub token_set_similarity: f64,
    pub combined: f64,
}

/// Verdict of the match evaluator for two records. Ephemeral: produced and
/// consumed within a single clustering run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairwiseMatchResult {
    pub record_a: usize,
    pub record_b: usize,
    pub distance_meters: f64,
    /// Combined name score in [0, 1]
    pub name_similarity: f64,
    pub token_set_similarity: f64,
    /// Name threshold after any word-overlap boost
    pub name_threshold: f64,
    pub blocking_conflict: Option<BlockingConflict>,
    /// Whether either name is generic
    pub is_generic: bool,
    pub match_type: MatchType,
    /// Confidence in [0, 100]
    pub confidence: f64,
}

impl PairwiseMatchResult {
    pub fn is_match(&self) -> bool {
        self.match_type != MatchType::None
    }
}
