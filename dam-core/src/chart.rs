//! Chart description handed to the D3.js renderer.
//!
//! All structs derive `Serialize` so the whole [`ChartSpec`] can be passed
//! to the browser as a single JSON document.

use crate::data_source::DataSource;
use crate::format::volume::format_volume;
use crate::projection::{ProjectionSeries, Projections};
use chrono::NaiveDateTime;
use log::warn;
use serde::Serialize;

/// Checklist value for the conservative curve.
pub const CONSERVATIVE_VALUE: &str = "CP";
/// Checklist value for the aggressive curve.
pub const AGGRESSIVE_VALUE: &str = "AP";

pub const ACTUAL_SERIES_NAME: &str = "Actual Volume";
pub const Y_AXIS_LABEL: &str = "Volume (acre-ft)";

/// Which projection curves the user asked to see. Empty by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ToggleSelection {
    pub conservative: bool,
    pub aggressive: bool,
}

impl ToggleSelection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn both() -> Self {
        Self {
            conservative: true,
            aggressive: true,
        }
    }

    /// Build a selection from checklist values (`CP`, `AP`). Unknown values
    /// are ignored.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::default();
        for value in values {
            match value.as_ref() {
                CONSERVATIVE_VALUE => selection.conservative = true,
                AGGRESSIVE_VALUE => selection.aggressive = true,
                other => warn!("Ignoring unknown projection toggle '{}'", other),
            }
        }
        selection
    }

    /// Checklist values for this selection, in display order.
    pub fn values(&self) -> Vec<&'static str> {
        let mut values = Vec::with_capacity(2);
        if self.conservative {
            values.push(CONSERVATIVE_VALUE);
        }
        if self.aggressive {
            values.push(AGGRESSIVE_VALUE);
        }
        values
    }

    pub fn is_empty(&self) -> bool {
        !self.conservative && !self.aggressive
    }
}

/// A (date, value) pair on a line.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDateTime,
    pub value: f64,
}

/// A line with markers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub points: Vec<ChartPoint>,
    /// Drawn with a dashed stroke
    pub dashed: bool,
    pub visible: bool,
}

/// A labelled arrow pointing at a data point. `ax`/`ay` are the pixel
/// offsets of the label from the point.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Annotation {
    pub date: NaiveDateTime,
    pub value: f64,
    pub text: String,
    pub ax: i32,
    pub ay: i32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: String,
    pub y_axis_label: String,
    /// Always three entries: actual, conservative, aggressive
    pub series: Vec<LineSeries>,
    pub annotation: Annotation,
}

impl ChartSpec {
    pub fn actual(&self) -> &LineSeries {
        &self.series[0]
    }

    pub fn conservative(&self) -> &LineSeries {
        &self.series[1]
    }

    pub fn aggressive(&self) -> &LineSeries {
        &self.series[2]
    }

    pub fn visible_series(&self) -> impl Iterator<Item = &LineSeries> {
        self.series.iter().filter(|s| s.visible)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Assembles a [`ChartSpec`]. Stateless; every call rebuilds the whole chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartBuilder;

impl ChartBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, data: &DataSource, projections: &Projections, toggles: ToggleSelection) -> ChartSpec {
        let actual = LineSeries {
            name: ACTUAL_SERIES_NAME.to_string(),
            points: data
                .points()
                .iter()
                .map(|p| ChartPoint {
                    date: p.timestamp,
                    value: p.volume,
                })
                .collect(),
            dashed: false,
            visible: true,
        };

        let latest = data.latest();
        let annotation = Annotation {
            date: latest.timestamp,
            value: latest.volume,
            text: format!("Last known volume: {} acre-ft", format_volume(latest.volume)),
            ax: 0,
            ay: -40,
        };

        ChartSpec {
            title: format!("Water Level at {}", latest.dam_name),
            y_axis_label: Y_AXIS_LABEL.to_string(),
            series: vec![
                actual,
                projection_line(&projections.conservative, toggles.conservative),
                projection_line(&projections.aggressive, toggles.aggressive),
            ],
            annotation,
        }
    }
}

fn projection_line(series: &ProjectionSeries, visible: bool) -> LineSeries {
    LineSeries {
        name: series.model.name().to_string(),
        points: series
            .points
            .iter()
            .map(|p| ChartPoint {
                date: p.date,
                value: p.volume,
            })
            .collect(),
        dashed: true,
        visible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionEngine;

    fn build(toggles: ToggleSelection) -> ChartSpec {
        let data = DataSource::sample().unwrap();
        let latest = data.latest();
        let projections = ProjectionEngine::default()
            .project(latest.volume, latest.timestamp)
            .unwrap();
        ChartBuilder::new().build(&data, &projections, toggles)
    }

    #[test]
    fn test_default_shows_only_actual() {
        let chart = build(ToggleSelection::default());
        assert!(chart.actual().visible);
        assert!(!chart.conservative().visible);
        assert!(!chart.aggressive().visible);
        assert_eq!(chart.visible_series().count(), 1);
    }

    #[test]
    fn test_conservative_toggle() {
        let chart = build(ToggleSelection::from_values(["CP"]));
        assert!(chart.actual().visible);
        assert!(chart.conservative().visible);
        assert!(!chart.aggressive().visible);
    }

    #[test]
    fn test_both_toggles() {
        let chart = build(ToggleSelection::from_values(["AP", "CP"]));
        assert!(chart.conservative().visible);
        assert!(chart.aggressive().visible);
    }

    #[test]
    fn test_series_layout() {
        let chart = build(ToggleSelection::none());
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Actual Volume", "Conservative Projection", "Aggressive Projection"]
        );
        assert_eq!(chart.actual().points.len(), 8);
        assert!(!chart.actual().dashed);
        assert!(chart.conservative().dashed && chart.aggressive().dashed);
        assert_eq!(chart.conservative().points.len(), 8);
        assert_eq!(chart.title, "Water Level at Glenn Canyon");
    }

    #[test]
    fn test_annotation_on_last_point() {
        let chart = build(ToggleSelection::none());
        let last = chart.actual().points.last().unwrap();
        assert_eq!(chart.annotation.date, last.date);
        assert_eq!(chart.annotation.value, 304083.0);
        assert_eq!(chart.annotation.text, "Last known volume: 304083 acre-ft");
        assert_eq!((chart.annotation.ax, chart.annotation.ay), (0, -40));
    }

    #[test]
    fn test_build_is_idempotent() {
        let toggles = ToggleSelection::from_values(["CP"]);
        assert_eq!(build(toggles), build(toggles));
    }

    #[test]
    fn test_toggle_values_round_trip() {
        assert_eq!(ToggleSelection::from_values(["CP", "XX"]).values(), vec!["CP"]);
        assert!(ToggleSelection::from_values(Vec::<String>::new()).is_empty());
        assert_eq!(ToggleSelection::both().values(), vec!["CP", "AP"]);
    }

    #[test]
    fn test_json_shape() {
        let json = build(ToggleSelection::none()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["yAxisLabel"], "Volume (acre-ft)");
        assert_eq!(value["series"][0]["points"][0]["date"], "2023-02-09T12:00:00");
        assert_eq!(value["series"][1]["visible"], false);
        assert_eq!(value["annotation"]["ay"], -40);
    }
}
