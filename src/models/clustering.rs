// src/models/clustering.rs
use serde::Serialize;
use serde_json::{Map, Value};

/// A final cluster produced by the cluster builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateGroup {
    /// Union-find root of the cluster
    pub representative: usize,
    /// Member record indices, ascending
    pub members: Vec<usize>,
    pub primary_name: Option<String>,
    pub alternate_names: Vec<String>,
    pub centroid_latitude: f64,
    pub centroid_longitude: f64,
    /// Mean confidence of the matches that formed the group; 100 for singletons
    pub average_confidence: f64,
    /// Number of pairwise matches that caused a merge inside this group
    pub contributing_matches: usize,
}

impl DuplicateGroup {
    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }
}

/// One output record folded from all members of a duplicate group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRecord {
    pub name: Option<String>,
    pub alternate_names: Vec<String>,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub region: Option<String>,
    pub category: Option<String>,
    pub extra: Map<String, Value>,
    pub confidence: f64,
    pub source_indices: Vec<usize>,
}
