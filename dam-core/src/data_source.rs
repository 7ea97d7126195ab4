//! The reservoir time series shown by the dashboard.

use crate::error::{DashboardError, Result};
use crate::format::dates::parse_timestamp;
use chrono::NaiveDateTime;
use csv::ReaderBuilder;
use log::info;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Embedded eight-point sample for Glenn Canyon.
pub static SAMPLE_CSV: &str = include_str!("../../fixtures/glenn_canyon.csv");

/// Column headers shared by the sample fixture and the CSV export.
pub const TIME_COLUMN: &str = "Time";
pub const VOLUME_COLUMN: &str = "Volume (acre-ft)";
pub const DAM_NAME_COLUMN: &str = "Dam Name";

/// A single reservoir reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub timestamp: NaiveDateTime,
    /// Storage in acre-feet (AF)
    pub volume: f64,
    pub dam_name: String,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Volume (acre-ft)")]
    volume: f64,
    #[serde(rename = "Dam Name")]
    dam_name: String,
}

/// Ordered, non-empty, read-only collection of readings.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    points: Vec<TimeSeriesPoint>,
}

impl DataSource {
    /// Load the embedded sample table.
    pub fn sample() -> Result<Self> {
        Self::from_csv(SAMPLE_CSV.as_bytes())
    }

    /// Load a CSV file with `Time,Volume (acre-ft),Dam Name` columns.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv(file)
    }

    /// Parse and validate CSV rows. The whole load is rejected on the first
    /// bad row.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut points = Vec::new();
        for result in rdr.deserialize() {
            let row: CsvRow = result?;
            points.push(TimeSeriesPoint {
                timestamp: parse_timestamp(&row.time)?,
                volume: row.volume,
                dam_name: row.dam_name,
            });
        }

        Self::from_points(points)
    }

    /// Validate already-parsed points: non-empty, non-decreasing timestamps,
    /// finite non-negative volumes.
    pub fn from_points(points: Vec<TimeSeriesPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(DashboardError::EmptyDataset);
        }
        for (index, point) in points.iter().enumerate() {
            if !point.volume.is_finite() || point.volume < 0.0 {
                return Err(DashboardError::InvalidVolume {
                    row: index + 1,
                    volume: point.volume,
                });
            }
        }
        // The later row of window `index` is data row `index + 2`.
        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].timestamp < pair[0].timestamp {
                return Err(DashboardError::OutOfOrder {
                    row: index + 2,
                    timestamp: pair[1].timestamp.to_string(),
                    previous: pair[0].timestamp.to_string(),
                });
            }
        }

        info!(
            "Loaded {} observations for {} ({} to {})",
            points.len(),
            points[0].dam_name,
            points[0].timestamp,
            points[points.len() - 1].timestamp
        );
        Ok(Self { points })
    }

    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; an empty table is rejected at load.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent reading.
    pub fn latest(&self) -> &TimeSeriesPoint {
        // Construction guarantees at least one point.
        &self.points[self.points.len() - 1]
    }

    /// Dam name of the most recent reading.
    pub fn dam_name(&self) -> &str {
        &self.latest().dam_name
    }
}
