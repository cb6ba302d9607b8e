// src/io/output.rs - Output adapter: JSON run reports and GeoJSON
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use log::info;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;

use crate::config::MatchConfig;
use crate::models::clustering::MergedRecord;
use crate::models::stats_models::ClusteringStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Run report with config, stats and merged records
    Json,
    /// FeatureCollection of merged points
    Geojson,
}

/// Everything one dedupe run produced.
#[derive(Debug, Clone, Serialize)]
pub struct DedupeReport {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub config: MatchConfig,
    pub stats: ClusteringStats,
    pub records: Vec<MergedRecord>,
}

impl DedupeReport {
    pub fn new(
        run_id: impl Into<String>,
        config: MatchConfig,
        stats: ClusteringStats,
        records: Vec<MergedRecord>,
    ) -> Self {
        Self {
            run_id: run_id.into(),
            generated_at: Utc::now(),
            config,
            stats,
            records,
        }
    }
}

/// Merged records as a GeoJSON FeatureCollection. Name, description, region,
/// category and confidence become properties alongside `extra`.
pub fn to_geojson(records: &[MergedRecord]) -> Value {
    let features: Vec<Value> = records
        .iter()
        .map(|record| {
            let mut properties = record.extra.clone();
            properties.insert("name".to_string(), json!(record.name));
            if !record.alternate_names.is_empty() {
                properties.insert("alternate_names".to_string(), json!(record.alternate_names));
            }
            properties.insert("description".to_string(), json!(record.description));
            properties.insert("region".to_string(), json!(record.region));
            properties.insert("category".to_string(), json!(record.category));
            properties.insert("confidence".to_string(), json!(record.confidence));
            properties.insert("source_indices".to_string(), json!(record.source_indices));
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [record.longitude, record.latitude],
                },
                "properties": Value::Object(properties),
            })
        })
        .collect();
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

pub fn render_report(report: &DedupeReport, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Geojson => serde_json::to_string_pretty(&to_geojson(&report.records)),
    };
    rendered.context("Failed to serialize dedupe output")
}

pub async fn write_report(
    path: impl AsRef<Path>,
    report: &DedupeReport,
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    let rendered = render_report(report, format)?;
    tokio::fs::write(path, rendered)
        .await
        .with_context(|| format!("Failed to write output file {}", path.display()))?;
    info!(
        "Wrote {} merged records to {} ({:?})",
        report.records.len(),
        path.display(),
        format
    );
    Ok(())
}
