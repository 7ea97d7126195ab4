//! Read-only dashboard configuration.
//!
//! A `DashboardConfig` is built once (defaults, or a JSON document) and
//! injected into every component at construction time.

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of projected points per curve.
pub const DEFAULT_PROJECTION_DAYS: usize = 8;

/// Longest projection accepted from configuration or the CLI (one leap year).
pub const MAX_PROJECTION_DAYS: usize = 366;

/// Filename offered for the CSV download.
pub const DEFAULT_EXPORT_FILENAME: &str = "my_data.csv";

/// Placeholder weather until a live feed is wired in.
pub const DEFAULT_WEATHER: &str = "Sunny, 75°F";

/// Volume cutoffs in acre-feet. A volume strictly greater than a cutoff
/// earns that condition; they are checked from `exceptional` down to
/// `drought`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub exceptional: f64,
    pub healthy: f64,
    pub normal: f64,
    /// Equal to `normal` by default, so the Drought condition is never reached.
    pub drought: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            exceptional: 300_000.0,
            healthy: 250_000.0,
            normal: 200_000.0,
            drought: 200_000.0,
        }
    }
}

impl Thresholds {
    fn validate(&self) -> Result<()> {
        let cutoffs = [self.exceptional, self.healthy, self.normal, self.drought];
        if cutoffs.iter().any(|c| !c.is_finite()) {
            return Err(DashboardError::InvalidConfig(
                "thresholds must be finite numbers".to_string(),
            ));
        }
        if cutoffs.windows(2).any(|w| w[0] < w[1]) {
            return Err(DashboardError::InvalidConfig(
                "thresholds must not increase from exceptional to drought".to_string(),
            ));
        }
        Ok(())
    }
}

/// Dashboard-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Heading on the home page
    pub title: String,
    /// Points per projection curve
    pub projection_days: usize,
    pub thresholds: Thresholds,
    pub export_filename: String,
    pub weather: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Dam Monitoring Dashboard".to_string(),
            projection_days: DEFAULT_PROJECTION_DAYS,
            thresholds: Thresholds::default(),
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
            weather: DEFAULT_WEATHER.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a JSON document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.projection_days == 0 || self.projection_days > MAX_PROJECTION_DAYS {
            return Err(DashboardError::InvalidConfig(format!(
                "projection_days must be between 1 and {}, got {}",
                MAX_PROJECTION_DAYS, self.projection_days
            )));
        }
        if self.export_filename.trim().is_empty() {
            return Err(DashboardError::InvalidConfig(
                "export_filename must not be empty".to_string(),
            ));
        }
        self.thresholds.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.projection_days, 8);
        assert_eq!(config.export_filename, "my_data.csv");
        assert_eq!(config.weather, "Sunny, 75°F");
        assert_eq!(config.thresholds.normal, config.thresholds.drought);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json(r#"{"thresholds": {"drought": 150000}}"#).unwrap();
        assert_eq!(config.thresholds.drought, 150_000.0);
        assert_eq!(config.thresholds.exceptional, 300_000.0);
        assert_eq!(config.projection_days, 8);
    }

    #[test]
    fn test_rejects_zero_projection_days() {
        let err = DashboardConfig::from_json(r#"{"projection_days": 0}"#).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_projection_days_above_maximum() {
        let config = DashboardConfig::from_json(r#"{"projection_days": 366}"#).unwrap();
        assert_eq!(config.projection_days, MAX_PROJECTION_DAYS);

        let err = DashboardConfig::from_json(r#"{"projection_days": 367}"#).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));

        let err = DashboardConfig::from_json(r#"{"projection_days": 18446744073709551615}"#).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_increasing_thresholds() {
        let err = DashboardConfig::from_json(r#"{"thresholds": {"drought": 260000}}"#).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = DashboardConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DashboardError::ConfigParse(_)));
    }
}
