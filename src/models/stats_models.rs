// src/models/stats_models.rs
use serde::Serialize;

/// Counters collected over one clustering run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClusteringStats {
    pub records: usize,
    pub pairs_evaluated: usize,
    pub blocked_pairs: usize,
    pub candidate_matches: usize,
    pub merges_applied: usize,
    pub skipped_same_cluster: usize,
    pub rejected_cluster_size: usize,
    pub rejected_cluster_diameter: usize,
    pub groups: usize,
    pub multi_member_groups: usize,
}

impl ClusteringStats {
    pub fn merges_rejected(&self) -> usize {
        self.rejected_cluster_size + self.rejected_cluster_diameter
    }

    pub fn records_merged_away(&self) -> usize {
        self.records.saturating_sub(self.groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_counters() {
        let stats = ClusteringStats {
            records: 10,
            groups: 4,
            rejected_cluster_size: 2,
            rejected_cluster_diameter: 1,
            ..Default::default()
        };
        assert_eq!(stats.records_merged_away(), 6);
        assert_eq!(stats.merges_rejected(), 3);
        assert_eq!(ClusteringStats::default().records_merged_away(), 0);
    }
}
