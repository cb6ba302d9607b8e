// src/models/core.rs
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single named, geo-located record as handed over by the input adapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Administrative region code
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Source-specific metadata, in source order
    #[serde(default)]
    pub extra: Map<String, Value>,
}

impl PointRecord {
    pub fn new(name: Option<&str>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.map(str::to_string),
            description: None,
            latitude,
            longitude,
            region: None,
            category: None,
            extra: Map::new(),
        }
    }

    /// The record name, or an empty string for unnamed records.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.has_valid_coordinates(),
            "coordinates ({}, {}) are non-finite or out of range",
            self.latitude,
            self.longitude
        );
        Ok(())
    }
}
