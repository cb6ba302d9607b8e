// src/utils/progress_bars/logging.rs - Logging helpers for clustering runs
use log::{debug, info, warn};
use std::time::Instant;

use crate::config::MatchConfig;
use crate::models::matching::PairwiseMatchResult;
use crate::models::stats_models::ClusteringStats;

const TAG: &str = "CLUSTER";
const EMOJI: &str = "🗺️";

#[derive(Clone)]
pub struct ClusteringLogger {
    run_id: String,
    start_time: Instant,
}

impl ClusteringLogger {
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            start_time: Instant::now(),
        }
    }

    pub fn log_start(&self, record_count: usize, config: &MatchConfig) {
        info!(
            "[{}] {} 🚀 Starting clustering of {} records (run ID: {})",
            TAG, EMOJI, record_count, self.run_id
        );
        info!(
            "[{}] {} ⚙️  Configuration: gps {:.0}m, name threshold {:.2}, min confidence {:.0}, max cluster size {}",
            TAG,
            EMOJI,
            config.gps_threshold_meters,
            config.name_threshold,
            config.min_confidence,
            config.max_cluster_size
        );
    }

    pub fn log_phase(&self, phase: &str, details: Option<&str>) {
        let elapsed = self.start_time.elapsed();
        let msg = if let Some(details) = details {
            format!(
                "[{}] {} 🔄 Phase: {} - {} [+{:.1}s]",
                TAG, EMOJI, phase, details, elapsed.as_secs_f32()
            )
        } else {
            format!(
                "[{}] {} 🔄 Phase: {} [+{:.1}s]",
                TAG, EMOJI, phase, elapsed.as_secs_f32()
            )
        };
        info!("{}", msg);
    }

    pub fn log_pair_generation(&self, total_pairs: usize) {
        info!(
            "[{}] {} 📈 Potential pairs to evaluate: {}",
            TAG, EMOJI, total_pairs
        );
    }

    pub fn log_candidates(&self, candidates: usize, blocked: usize) {
        info!(
            "[{}] {} 🎯 {} candidate matches above the confidence floor ({} pairs vetoed by blocking)",
            TAG, EMOJI, candidates, blocked
        );
    }

    pub fn log_merge(&self, result: &PairwiseMatchResult) {
        debug!(
            "[{}] {} merge {} <-> {} ({}, confidence {:.0}, {:.1}m, name {:.3})",
            TAG,
            EMOJI,
            result.record_a,
            result.record_b,
            result.match_type,
            result.confidence,
            result.distance_meters,
            result.name_similarity
        );
    }

    pub fn log_rejected_merge(&self, result: &PairwiseMatchResult, reason: &str) {
        debug!(
            "[{}] {} rejected {} <-> {}: {}",
            TAG, EMOJI, result.record_a, result.record_b, reason
        );
    }

    pub fn log_memory(&self, used_mb: u64) {
        info!("[{}] {} 💾 Memory in use: {} MB", TAG, EMOJI, used_mb);
    }

    pub fn log_completion(&self, stats: &ClusteringStats) {
        let duration = self.start_time.elapsed();
        info!(
            "[{}] {} 🎉 COMPLETED: {} records → {} groups ({} with 2+ members) in {:.2?}",
            TAG, EMOJI, stats.records, stats.groups, stats.multi_member_groups, duration
        );
        info!(
            "[{}] {} 📊 Results: {} merges applied, {} records merged away, {} already clustered, {} pairs evaluated",
            TAG,
            EMOJI,
            stats.merges_applied,
            stats.records_merged_away(),
            stats.skipped_same_cluster,
            stats.pairs_evaluated
        );
        if stats.merges_rejected() > 0 {
            warn!(
                "[{}] {} ⚠️  {} merges rejected by cluster caps ({} size, {} diameter)",
                TAG,
                EMOJI,
                stats.merges_rejected(),
                stats.rejected_cluster_size,
                stats.rejected_cluster_diameter
            );
        }
    }

    pub fn get_elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }
}
