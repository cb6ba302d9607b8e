// src/io/records.rs - Input adapter: JSON record arrays and GeoJSON point collections
use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info};
use serde_json::{Map, Value};
use std::path::Path;

use crate::models::core::PointRecord;

/// Read and parse an input file.
pub async fn load_records(path: impl AsRef<Path>) -> Result<Vec<PointRecord>> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    let records = parse_records(&raw)
        .with_context(|| format!("Failed to parse input file {}", path.display()))?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse either a JSON array of records or a GeoJSON FeatureCollection of
/// points. Every record is validated; errors name the offending index.
pub fn parse_records(raw: &str) -> Result<Vec<PointRecord>> {
    let value: Value = serde_json::from_str(raw).context("Input is not valid JSON")?;
    let records = match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                serde_json::from_value::<PointRecord>(item)
                    .with_context(|| format!("Record {} does not match the record shape", idx))
            })
            .collect::<Result<Vec<_>>>()?,
        Value::Object(mut object) => {
            if object.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
                bail!("Expected a JSON array or a GeoJSON FeatureCollection");
            }
            let features = match object.remove("features") {
                Some(Value::Array(features)) => features,
                _ => bail!("FeatureCollection has no features array"),
            };
            debug!("Parsing {} GeoJSON features", features.len());
            features
                .into_iter()
                .enumerate()
                .map(|(idx, feature)| {
                    record_from_feature(feature)
                        .with_context(|| format!("Record {} is not a point feature", idx))
                })
                .collect::<Result<Vec<_>>>()?
        }
        _ => bail!("Expected a JSON array or a GeoJSON FeatureCollection"),
    };

    for (idx, record) in records.iter().enumerate() {
        record
            .validate()
            .with_context(|| format!("Record {} has invalid coordinates", idx))?;
    }
    Ok(records)
}

fn record_from_feature(feature: Value) -> Result<PointRecord> {
    let Value::Object(mut feature) = feature else {
        bail!("feature is not an object");
    };
    let geometry = feature
        .remove("geometry")
        .ok_or_else(|| anyhow!("feature has no geometry"))?;
    if geometry.get("type").and_then(Value::as_str) != Some("Point") {
        bail!("geometry is not a Point");
    }
    let coordinates = geometry
        .get("coordinates")
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("point has no coordinates"))?;
    // GeoJSON positions are [longitude, latitude]
    let (longitude, latitude) = match coordinates.as_slice() {
        [lon, lat, ..] => (
            lon.as_f64().ok_or_else(|| anyhow!("longitude is not a number"))?,
            lat.as_f64().ok_or_else(|| anyhow!("latitude is not a number"))?,
        ),
        _ => bail!("point needs at least two coordinates"),
    };

    let mut properties = match feature.remove("properties") {
        Some(Value::Object(properties)) => properties,
        _ => Map::new(),
    };
    let mut take_string = |key: &str| match properties.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    };
    let name = take_string("name");
    let description = take_string("description");
    let region = take_string("region");
    let category = take_string("category");

    Ok(PointRecord {
        name,
        description,
        latitude,
        longitude,
        region,
        category,
        extra: properties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_record_array() {
        let raw = r#"[
            {"name": "Union Station", "latitude": 43.0, "longitude": -77.0, "extra": {"source": "kml"}},
            {"latitude": 43.1, "longitude": -77.1}
        ]"#;
        let records = parse_records(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Union Station"));
        assert_eq!(records[0].extra.get("source"), Some(&Value::from("kml")));
        assert!(records[1].name.is_none());
    }

    #[test]
    fn test_parse_feature_collection() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [-77.0, 43.0, 150.0]},
                "properties": {"name": "Union Depot", "region": "NY", "built": 1889}
            }]
        }"#;
        let records = parse_records(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].latitude, 43.0);
        assert_eq!(records[0].longitude, -77.0);
        assert_eq!(records[0].region.as_deref(), Some("NY"));
        assert_eq!(records[0].extra.get("built"), Some(&Value::from(1889)));
        assert!(records[0].extra.get("name").is_none());
    }

    #[test]
    fn test_errors_name_the_record() {
        let raw = r#"[
            {"latitude": 43.0, "longitude": -77.0},
            {"latitude": 143.0, "longitude": -77.0}
        ]"#;
        let err = parse_records(raw).unwrap_err();
        assert!(format!("{:#}", err).contains("Record 1"));

        let raw = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "geometry": {"type": "LineString", "coordinates": []}}
        ]}"#;
        let err = parse_records(raw).unwrap_err();
        assert!(format!("{:#}", err).contains("Record 0"));

        assert!(parse_records(r#"{"type": "Feature"}"#).is_err());
        assert!(parse_records("42").is_err());
    }

    #[tokio::test]
    async fn test_load_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Old Mill", "latitude": 42.5, "longitude": -76.5}}]"#).unwrap();
        let records = load_records(file.path()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("Old Mill"));

        assert!(load_records("/nonexistent/records.json").await.is_err());
    }
}
