// src/clustering/materialize.rs - Fold duplicate groups into merged output records
use anyhow::Result;
use serde_json::Map;

use crate::clustering::record_clustering::cluster_records;
use crate::config::MatchConfig;
use crate::models::clustering::{DuplicateGroup, MergedRecord};
use crate::models::core::PointRecord;

pub const DESCRIPTION_SEPARATOR: &str = "\n\n";

/// Merge one group's member records. Descriptions are de-duplicated and
/// joined, `extra` maps merge with later members winning, and region and
/// category come from the first member that has one.
pub fn materialize_group(group: &DuplicateGroup, records: &[PointRecord]) -> MergedRecord {
    let members: Vec<&PointRecord> = group
        .members
        .iter()
        .filter_map(|&idx| records.get(idx))
        .collect();

    let mut descriptions: Vec<&str> = Vec::new();
    for description in members.iter().filter_map(|r| r.description.as_deref()) {
        let description = description.trim();
        if !description.is_empty() && !descriptions.contains(&description) {
            descriptions.push(description);
        }
    }

    let mut extra = Map::new();
    for member in &members {
        for (key, value) in &member.extra {
            extra.insert(key.clone(), value.clone());
        }
    }

    MergedRecord {
        name: group.primary_name.clone(),
        alternate_names: group.alternate_names.clone(),
        description: (!descriptions.is_empty()).then(|| descriptions.join(DESCRIPTION_SEPARATOR)),
        latitude: group.centroid_latitude,
        longitude: group.centroid_longitude,
        region: members.iter().find_map(|r| r.region.clone()),
        category: members.iter().find_map(|r| r.category.clone()),
        extra,
        confidence: group.average_confidence,
        source_indices: group.members.clone(),
    }
}

/// Cluster the records and materialize every resulting group.
pub fn merge_records(records: &[PointRecord], config: &MatchConfig) -> Result<Vec<MergedRecord>> {
    let groups = cluster_records(records, config)?;
    Ok(groups
        .iter()
        .map(|group| materialize_group(group, records))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MATCH_CONFIG;
    use serde_json::json;

    fn detailed(
        name: &str,
        description: Option<&str>,
        region: Option<&str>,
        category: Option<&str>,
        extra: serde_json::Value,
    ) -> PointRecord {
        let mut record = PointRecord::new(Some(name), 43.0, -77.0);
        record.description = description.map(str::to_string);
        record.region = region.map(str::to_string);
        record.category = category.map(str::to_string);
        if let serde_json::Value::Object(map) = extra {
            record.extra = map;
        }
        record
    }

    fn group_of(members: Vec<usize>) -> DuplicateGroup {
        DuplicateGroup {
            representative: members[0],
            members,
            primary_name: Some("Union Station".to_string()),
            alternate_names: vec!["Union Depot".to_string()],
            centroid_latitude: 43.0,
            centroid_longitude: -77.0,
            average_confidence: 95.0,
            contributing_matches: 1,
        }
    }

    #[test]
    fn test_descriptions_and_fields_merge() {
        let records = vec![
            detailed(
                "Union Station",
                Some("Built 1889."),
                None,
                Some("rail"),
                json!({"source": "kml", "year": 1889}),
            ),
            detailed(
                "Union Depot",
                Some("Built 1889."),
                Some("NY"),
                Some("transport"),
                json!({"source": "gpx", "photo": "depot.jpg"}),
            ),
            detailed("Union Depot", Some("Razed 1962."), Some("PA"), None, json!({})),
        ];
        let merged = materialize_group(&group_of(vec![0, 1, 2]), &records);

        assert_eq!(merged.description.as_deref(), Some("Built 1889.\n\nRazed 1962."));
        assert_eq!(merged.region.as_deref(), Some("NY"));
        assert_eq!(merged.category.as_deref(), Some("rail"));
        assert_eq!(merged.extra.get("source"), Some(&json!("gpx")));
        assert_eq!(merged.extra.get("year"), Some(&json!(1889)));
        let keys: Vec<&str> = merged.extra.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["source", "year", "photo"]);
        assert_eq!(merged.source_indices, vec![0, 1, 2]);
        assert_eq!(merged.confidence, 95.0);
    }

    #[test]
    fn test_no_descriptions() {
        let records = vec![detailed("Union Station", None, None, None, json!({}))];
        let merged = materialize_group(&group_of(vec![0]), &records);
        assert!(merged.description.is_none());
        assert!(merged.region.is_none());
        assert!(merged.extra.is_empty());
    }

    #[test]
    fn test_merge_records_end_to_end() {
        let records = vec![
            PointRecord::new(Some("Union Station"), 43.0, -77.0),
            PointRecord::new(Some("Union Depot"), 43.0001, -77.0001),
            PointRecord::new(Some("Unrelated"), 44.0, -78.0),
        ];
        let merged = merge_records(&records, &DEFAULT_MATCH_CONFIG).unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name.as_deref(), Some("Union Station"));
        assert_eq!(merged[0].alternate_names, vec!["Union Depot".to_string()]);
        assert_eq!(merged[1].name.as_deref(), Some("Unrelated"));
        assert_eq!(merged[1].source_indices, vec![2]);
    }
}
