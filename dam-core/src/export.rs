//! CSV export of the data source.

use crate::data_source::{DataSource, DAM_NAME_COLUMN, TIME_COLUMN, VOLUME_COLUMN};
use crate::error::{DashboardError, Result};
use crate::format::dates::format_timestamp;
use crate::format::volume::format_volume;
use log::info;
use std::io::Write;

pub const CSV_MIME_TYPE: &str = "text/csv";

/// A downloadable artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    pub fn as_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.bytes).map_err(|e| DashboardError::Export(e.to_string()))
    }
}

/// Serializes a [`DataSource`] to CSV under a fixed filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportService {
    filename: String,
}

impl ExportService {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn export(&self, data: &DataSource) -> Result<ExportFile> {
        let mut bytes = Vec::new();
        write_csv(data, &mut bytes)?;
        info!("Exported {} rows to {}", data.len(), self.filename);
        Ok(ExportFile {
            filename: self.filename.clone(),
            mime_type: CSV_MIME_TYPE,
            bytes,
        })
    }
}

/// Write the header row and one row per reading.
pub fn write_csv<W: Write>(data: &DataSource, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([TIME_COLUMN, VOLUME_COLUMN, DAM_NAME_COLUMN])?;
    for point in data.points() {
        wtr.write_record([
            format_timestamp(&point.timestamp),
            format_volume(point.volume),
            point.dam_name.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
