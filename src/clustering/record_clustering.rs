// src/clustering/record_clustering.rs - Greedy confidence-ordered clustering with growth caps
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use rayon::prelude::*;
use std::collections::HashMap;
use uuid::Uuid;

use crate::config::MatchConfig;
use crate::matching::evaluator::{evaluate_prepared, PreparedName};
use crate::matching::geo::calculate_distance;
use crate::models::clustering::DuplicateGroup;
use crate::models::core::PointRecord;
use crate::models::matching::PairwiseMatchResult;
use crate::models::stats_models::ClusteringStats;
use crate::utils::progress_bars::logging::ClusteringLogger;

/// Confidence reported for groups that formed without any pairwise match.
pub const SINGLETON_CONFIDENCE: f64 = 100.0;

/// Cluster records into duplicate groups.
pub fn cluster_records(records: &[PointRecord], config: &MatchConfig) -> Result<Vec<DuplicateGroup>> {
    cluster_records_with_stats(records, config).map(|(groups, _)| groups)
}

/// Cluster records and report run counters alongside the groups.
pub fn cluster_records_with_stats(
    records: &[PointRecord],
    config: &MatchConfig,
) -> Result<(Vec<DuplicateGroup>, ClusteringStats)> {
    let logger = ClusteringLogger::new(Uuid::new_v4().to_string());
    cluster_records_with_progress(records, config, &logger, None)
}

/// Full clustering run. Config and coordinates are checked before any
/// clustering state exists, so a bad input aborts the whole call.
pub fn cluster_records_with_progress(
    records: &[PointRecord],
    config: &MatchConfig,
    logger: &ClusteringLogger,
    progress: Option<&ProgressBar>,
) -> Result<(Vec<DuplicateGroup>, ClusteringStats)> {
    config.validate().context("Invalid match configuration")?;
    for (idx, record) in records.iter().enumerate() {
        record
            .validate()
            .with_context(|| format!("Record {} has invalid coordinates", idx))?;
    }

    logger.log_start(records.len(), config);
    let mut stats = ClusteringStats {
        records: records.len(),
        ..Default::default()
    };

    logger.log_phase("Preparing names", None);
    let prepared: Vec<PreparedName> = records.par_iter().map(PreparedName::from_record).collect();

    let n = records.len();
    stats.pairs_evaluated = n * n.saturating_sub(1) / 2;
    logger.log_pair_generation(stats.pairs_evaluated);
    if let Some(pb) = progress {
        pb.set_length(stats.pairs_evaluated as u64);
    }

    logger.log_phase("Evaluating pairs", None);
    let (candidates, blocked_pairs) = evaluate_all_pairs(records, &prepared, config, progress);
    stats.blocked_pairs = blocked_pairs;
    stats.candidate_matches = candidates.len();
    if let Some(pb) = progress {
        pb.finish_with_message("Pairs evaluated");
    }
    logger.log_candidates(candidates.len(), blocked_pairs);

    logger.log_phase("Merging clusters", None);
    let clusters = merge_candidates(records, &candidates, config, logger, &mut stats);

    let groups = build_groups(records, clusters);
    stats.groups = groups.len();
    stats.multi_member_groups = groups.iter().filter(|g| !g.is_singleton()).count();
    logger.log_completion(&stats);

    Ok((groups, stats))
}

/// Evaluate every unordered pair in parallel and keep the mergeable ones,
/// sorted by confidence descending. Ties keep row-major pair order, which is
/// the order rayon collects rows in. Also returns the number of blocked pairs.
fn evaluate_all_pairs(
    records: &[PointRecord],
    prepared: &[PreparedName],
    config: &MatchConfig,
    progress: Option<&ProgressBar>,
) -> (Vec<PairwiseMatchResult>, usize) {
    let n = records.len();
    let rows: Vec<(Vec<PairwiseMatchResult>, usize)> = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut candidates = Vec::new();
            let mut blocked = 0;
            for j in i + 1..n {
                let result = evaluate_prepared(
                    i,
                    &records[i],
                    &prepared[i],
                    j,
                    &records[j],
                    &prepared[j],
                    config,
                );
                if let Some(conflict) = &result.blocking_conflict {
                    blocked += 1;
                    debug!("Blocked {} <-> {}: {}", i, j, conflict);
                } else if is_candidate(&result, config) {
                    candidates.push(result);
                }
            }
            if let Some(pb) = progress {
                pb.inc((n - i - 1) as u64);
            }
            (candidates, blocked)
        })
        .collect();

    let blocked_pairs = rows.iter().map(|(_, blocked)| blocked).sum();
    let mut candidates: Vec<PairwiseMatchResult> =
        rows.into_iter().flat_map(|(row, _)| row).collect();
    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    (candidates, blocked_pairs)
}

fn is_candidate(result: &PairwiseMatchResult, config: &MatchConfig) -> bool {
    result.is_match() && result.confidence >= config.min_confidence
}

/// A cluster's members plus the confidences of the matches that built it.
#[derive(Debug, Default)]
struct ClusterState {
    members: Vec<usize>,
    confidences: Vec<f64>,
}

/// Apply candidates in order, skipping any merge that would break the size or
/// diameter cap. Returns the final clusters keyed by union-find root.
fn merge_candidates(
    records: &[PointRecord],
    candidates: &[PairwiseMatchResult],
    config: &MatchConfig,
    logger: &ClusteringLogger,
    stats: &mut ClusteringStats,
) -> HashMap<usize, ClusterState> {
    let mut uf = UnionFind::<usize>::new(records.len());
    let mut clusters: HashMap<usize, ClusterState> = (0..records.len())
        .map(|idx| {
            (
                idx,
                ClusterState {
                    members: vec![idx],
                    confidences: Vec::new(),
                },
            )
        })
        .collect();

    for candidate in candidates {
        let root_a = uf.find_mut(candidate.record_a);
        let root_b = uf.find_mut(candidate.record_b);
        if root_a == root_b {
            stats.skipped_same_cluster += 1;
            continue;
        }

        let (Some(members_a), Some(members_b)) = (
            clusters.get(&root_a).map(|c| &c.members),
            clusters.get(&root_b).map(|c| &c.members),
        ) else {
            continue;
        };

        if members_a.len() + members_b.len() > config.max_cluster_size {
            stats.rejected_cluster_size += 1;
            logger.log_rejected_merge(candidate, "cluster size cap");
            continue;
        }
        if exceeds_diameter(records, members_a, members_b, config.max_cluster_diameter_meters) {
            stats.rejected_cluster_diameter += 1;
            logger.log_rejected_merge(candidate, "cluster diameter cap");
            continue;
        }

        let state_a = clusters.remove(&root_a).unwrap_or_default();
        let state_b = clusters.remove(&root_b).unwrap_or_default();
        uf.union(root_a, root_b);
        let root = uf.find_mut(root_a);

        let mut merged = ClusterState {
            members: state_a.members,
            confidences: state_a.confidences,
        };
        merged.members.extend(state_b.members);
        merged.confidences.extend(state_b.confidences);
        merged.confidences.push(candidate.confidence);
        clusters.insert(root, merged);

        stats.merges_applied += 1;
        logger.log_merge(candidate);
    }

    clusters
}

/// Whether joining two clusters would put some pair of members further apart
/// than `max_diameter`. Members within each cluster already satisfy the cap,
/// so only cross pairs are measured.
fn exceeds_diameter(
    records: &[PointRecord],
    members_a: &[usize],
    members_b: &[usize],
    max_diameter: f64,
) -> bool {
    if max_diameter.is_infinite() {
        return false;
    }
    members_a.iter().any(|&a| {
        members_b.iter().any(|&b| {
            calculate_distance(
                records[a].latitude,
                records[a].longitude,
                records[b].latitude,
                records[b].longitude,
            ) > max_diameter
        })
    })
}

fn build_groups(records: &[PointRecord], clusters: HashMap<usize, ClusterState>) -> Vec<DuplicateGroup> {
    let mut groups: Vec<DuplicateGroup> = clusters
        .into_iter()
        .map(|(root, mut state)| {
            state.members.sort_unstable();
            build_group(records, root, state)
        })
        .collect();
    groups.sort_by_key(|g| g.members.first().copied().unwrap_or(usize::MAX));
    info!("Built {} groups from {} records", groups.len(), records.len());
    groups
}

fn build_group(records: &[PointRecord], representative: usize, state: ClusterState) -> DuplicateGroup {
    let names = resolve_names(state.members.iter().map(|&idx| records[idx].name.as_deref()));
    let mut names = names.into_iter();
    let primary_name = names.next();
    let alternate_names: Vec<String> = names.collect();

    let count = state.members.len().max(1) as f64;
    let centroid_latitude = state.members.iter().map(|&idx| records[idx].latitude).sum::<f64>() / count;
    let centroid_longitude = state.members.iter().map(|&idx| records[idx].longitude).sum::<f64>() / count;

    let average_confidence = if state.confidences.is_empty() {
        SINGLETON_CONFIDENCE
    } else {
        state.confidences.iter().sum::<f64>() / state.confidences.len() as f64
    };

    DuplicateGroup {
        representative,
        members: state.members,
        primary_name,
        alternate_names,
        centroid_latitude,
        centroid_longitude,
        average_confidence,
        contributing_matches: state.confidences.len(),
    }
}

/// Distinct names, longest first. Names are compared case-insensitively and
/// the longest original spelling of each is kept; the first seen wins a tie.
pub fn resolve_names<'a>(names: impl IntoIterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut best: HashMap<String, String> = HashMap::new();
    for name in names.into_iter().flatten() {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let key = name.to_lowercase();
        match best.get_mut(&key) {
            Some(existing) => {
                if name.chars().count() > existing.chars().count() {
                    *existing = name.to_string();
                }
            }
            None => {
                order.push(key.clone());
                best.insert(key, name.to_string());
            }
        }
    }

    let mut resolved: Vec<String> = order
        .into_iter()
        .filter_map(|key| best.remove(&key))
        .collect();
    resolved.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    resolved
}
