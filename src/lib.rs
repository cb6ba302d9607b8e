pub mod clustering;
pub mod config;
pub mod io;
pub mod matching;
pub mod models;
pub mod utils;

pub use clustering::materialize::{materialize_group, merge_records};
pub use clustering::record_clustering::{
    cluster_records, cluster_records_with_progress, cluster_records_with_stats,
};
pub use config::{MatchConfig, DEFAULT_MATCH_CONFIG};
pub use matching::evaluator::evaluate_pair;
pub use matching::normalize::normalize_name;
pub use matching::similarity::score_names;
pub use models::clustering::{DuplicateGroup, MergedRecord};
pub use models::core::PointRecord;
pub use models::matching::{MatchType, NameScores, PairwiseMatchResult};
