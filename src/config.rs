// src/config.rs

use anyhow::{ensure, Result};
use log::{debug, info, warn};
use serde::Serialize;
use std::env;
use std::str::FromStr;

/// Largest Jaro-Winkler prefix scaling factor that keeps scores within [0, 1].
pub const MAX_PREFIX_SCALE: f64 = 0.25;

/// Thresholds and safeguards for one matching and clustering run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchConfig {
    /// Two records closer than this (meters) count as a GPS match
    pub gps_threshold_meters: f64,
    /// Minimum combined name score, 0-1, for a name match
    pub name_threshold: f64,
    /// Stricter GPS distance (meters) required when either name is generic
    pub generic_gps_threshold_meters: f64,
    /// When set, name similarity alone never produces a match
    pub require_gps_match: bool,
    /// Lower the name threshold for pairs that share an exact word
    pub word_overlap_boost: bool,
    /// Maximum number of records in one cluster
    pub max_cluster_size: usize,
    /// Maximum great-circle distance (meters) between any two cluster members
    pub max_cluster_diameter_meters: f64,
    /// Matches below this confidence (0-100) are never merged
    pub min_confidence: f64,
    /// Jaro-Winkler prefix scaling factor, clamped to [0, 0.25]
    pub prefix_scale: f64,
}

pub const DEFAULT_MATCH_CONFIG: MatchConfig = MatchConfig {
    gps_threshold_meters: 100.0,
    name_threshold: 0.85,
    generic_gps_threshold_meters: 25.0,
    require_gps_match: false,
    word_overlap_boost: true,
    max_cluster_size: 25,
    max_cluster_diameter_meters: 2_000.0,
    min_confidence: 60.0,
    prefix_scale: 0.1,
};

impl Default for MatchConfig {
    fn default() -> Self {
        DEFAULT_MATCH_CONFIG
    }
}

impl MatchConfig {
    /// Build a configuration from `DEDUPE_*` environment variables, starting
    /// from the defaults.
    pub fn from_env() -> Self {
        let d = DEFAULT_MATCH_CONFIG;
        let config = Self {
            gps_threshold_meters: env_or("DEDUPE_GPS_THRESHOLD_METERS", d.gps_threshold_meters),
            name_threshold: env_or("DEDUPE_NAME_THRESHOLD", d.name_threshold),
            generic_gps_threshold_meters: env_or(
                "DEDUPE_GENERIC_GPS_THRESHOLD_METERS",
                d.generic_gps_threshold_meters,
            ),
            require_gps_match: env_or("DEDUPE_REQUIRE_GPS_MATCH", d.require_gps_match),
            word_overlap_boost: env_or("DEDUPE_WORD_OVERLAP_BOOST", d.word_overlap_boost),
            max_cluster_size: env_or("DEDUPE_MAX_CLUSTER_SIZE", d.max_cluster_size),
            max_cluster_diameter_meters: env_or(
                "DEDUPE_MAX_CLUSTER_DIAMETER_METERS",
                d.max_cluster_diameter_meters,
            ),
            min_confidence: env_or("DEDUPE_MIN_CONFIDENCE", d.min_confidence),
            prefix_scale: env_or("DEDUPE_PREFIX_SCALE", d.prefix_scale),
        };
        debug!("Match config from env: {:?}", config);
        config
    }

    /// Prefix scale actually applied by the scorer.
    pub fn effective_prefix_scale(&self) -> f64 {
        self.prefix_scale.clamp(0.0, MAX_PREFIX_SCALE)
    }

    /// Reject out-of-range values before any clustering state exists.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.gps_threshold_meters.is_finite() && self.gps_threshold_meters >= 0.0,
            "gps_threshold_meters must be a non-negative number, got {}",
            self.gps_threshold_meters
        );
        ensure!(
            (0.0..=1.0).contains(&self.name_threshold),
            "name_threshold must be within 0-1, got {}",
            self.name_threshold
        );
        ensure!(
            self.generic_gps_threshold_meters.is_finite()
                && self.generic_gps_threshold_meters >= 0.0,
            "generic_gps_threshold_meters must be a non-negative number, got {}",
            self.generic_gps_threshold_meters
        );
        ensure!(
            self.max_cluster_size >= 1,
            "max_cluster_size must be at least 1"
        );
        ensure!(
            !self.max_cluster_diameter_meters.is_nan() && self.max_cluster_diameter_meters >= 0.0,
            "max_cluster_diameter_meters must be non-negative, got {}",
            self.max_cluster_diameter_meters
        );
        ensure!(
            (0.0..=100.0).contains(&self.min_confidence),
            "min_confidence must be within 0-100, got {}",
            self.min_confidence
        );
        ensure!(
            self.prefix_scale.is_finite(),
            "prefix_scale must be finite, got {}",
            self.prefix_scale
        );
        Ok(())
    }

    pub fn log_config(&self) {
        info!("📐 Match configuration");
        info!(
            "   GPS threshold: {:.1} m (generic names: {:.1} m), GPS required: {}",
            self.gps_threshold_meters, self.generic_gps_threshold_meters, self.require_gps_match
        );
        info!(
            "   Name threshold: {:.2}, word-overlap boost: {}, prefix scale: {:.2}",
            self.name_threshold,
            self.word_overlap_boost,
            self.effective_prefix_scale()
        );
        info!(
            "   Cluster safeguards: max size {}, max diameter {:.1} m, min confidence {:.0}",
            self.max_cluster_size, self.max_cluster_diameter_meters, self.min_confidence
        );
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Debug,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "Ignoring unparseable {}='{}', using default {:?}",
                    key, raw, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DEFAULT_MATCH_CONFIG.validate().is_ok());
        assert_eq!(MatchConfig::default(), DEFAULT_MATCH_CONFIG);
    }

    #[test]
    fn test_validation_rejects_out_of_range_values() {
        let mut config = DEFAULT_MATCH_CONFIG;
        config.name_threshold = 1.2;
        assert!(config.validate().is_err());

        let mut config = DEFAULT_MATCH_CONFIG;
        config.gps_threshold_meters = -1.0;
        assert!(config.validate().is_err());

        let mut config = DEFAULT_MATCH_CONFIG;
        config.min_confidence = 101.0;
        assert!(config.validate().is_err());

        let mut config = DEFAULT_MATCH_CONFIG;
        config.max_cluster_size = 0;
        assert!(config.validate().is_err());

        let mut config = DEFAULT_MATCH_CONFIG;
        config.max_cluster_diameter_meters = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_infinite_diameter_is_allowed() {
        let mut config = DEFAULT_MATCH_CONFIG;
        config.max_cluster_diameter_meters = f64::INFINITY;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_prefix_scale_is_clamped() {
        let mut config = DEFAULT_MATCH_CONFIG;
        config.prefix_scale = 0.4;
        assert_eq!(config.effective_prefix_scale(), MAX_PREFIX_SCALE);
        config.prefix_scale = -0.1;
        assert_eq!(config.effective_prefix_scale(), 0.0);
    }

    #[test]
    fn test_env_config() {
        env::set_var("DEDUPE_GPS_THRESHOLD_METERS", "250");
        env::set_var("DEDUPE_REQUIRE_GPS_MATCH", "true");
        env::set_var("DEDUPE_MAX_CLUSTER_SIZE", "not-a-number");

        let config = MatchConfig::from_env();
        assert_eq!(config.gps_threshold_meters, 250.0);
        assert!(config.require_gps_match);
        assert_eq!(config.max_cluster_size, DEFAULT_MATCH_CONFIG.max_cluster_size);

        env::remove_var("DEDUPE_GPS_THRESHOLD_METERS");
        env::remove_var("DEDUPE_REQUIRE_GPS_MATCH");
        env::remove_var("DEDUPE_MAX_CLUSTER_SIZE");
    }
}
