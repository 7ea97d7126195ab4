//! Synthetic forward projections anchored at the last known reading.
//!
//! Both curves are closed-form and start at day 0, so their first point
//! repeats the last actual reading.

use crate::config::{DEFAULT_PROJECTION_DAYS, MAX_PROJECTION_DAYS};
use crate::error::{DashboardError, Result};
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

/// Which projection curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectionModel {
    Conservative,
    Aggressive,
}

impl ProjectionModel {
    /// Legend name.
    pub fn name(&self) -> &'static str {
        match self {
            ProjectionModel::Conservative => "Conservative Projection",
            ProjectionModel::Aggressive => "Aggressive Projection",
        }
    }

    /// Volume added to the anchor on day `i`.
    ///
    /// Conservative: `i² · 10`. Aggressive: `i · 100 + i⁴`.
    pub fn offset(&self, i: u32) -> f64 {
        let i = f64::from(i);
        match self {
            ProjectionModel::Conservative => i * i * 10.0,
            ProjectionModel::Aggressive => i * 100.0 + i.powi(4),
        }
    }
}

/// A single projected value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedPoint {
    pub date: NaiveDateTime,
    pub volume: f64,
}

/// One projected curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionSeries {
    pub model: ProjectionModel,
    pub points: Vec<ProjectedPoint>,
}

impl ProjectionSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.volume).collect()
    }
}

/// Both curves for a single anchor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projections {
    pub conservative: ProjectionSeries,
    pub aggressive: ProjectionSeries,
}

/// Generates [`Projections`] of a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionEngine {
    days: u32,
}

impl ProjectionEngine {
    /// `days` must be between 1 and [`MAX_PROJECTION_DAYS`].
    pub fn new(days: usize) -> Result<Self> {
        if days == 0 || days > MAX_PROJECTION_DAYS {
            return Err(DashboardError::InvalidConfig(format!(
                "projection_days must be between 1 and {}, got {}",
                MAX_PROJECTION_DAYS, days
            )));
        }
        Ok(Self { days: days as u32 })
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Fails when a projected date would leave chrono's calendar range.
    pub fn project(&self, last_volume: f64, last_date: NaiveDateTime) -> Result<Projections> {
        Ok(Projections {
            conservative: self.series(ProjectionModel::Conservative, last_volume, last_date)?,
            aggressive: self.series(ProjectionModel::Aggressive, last_volume, last_date)?,
        })
    }

    fn series(
        &self,
        model: ProjectionModel,
        last_volume: f64,
        last_date: NaiveDateTime,
    ) -> Result<ProjectionSeries> {
        let points = (0..self.days)
            .map(|i| {
                let date = TimeDelta::try_days(i64::from(i))
                    .and_then(|step| last_date.checked_add_signed(step))
                    .ok_or_else(|| DashboardError::ProjectionOverflow {
                        anchor: last_date.to_string(),
                        days: self.days,
                    })?;
                Ok(ProjectedPoint {
                    date,
                    volume: last_volume + model.offset(i),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ProjectionSeries { model, points })
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self {
            days: DEFAULT_PROJECTION_DAYS as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 2, 16)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_conservative_values() {
        let projections = ProjectionEngine::default().project(304083.0, anchor()).unwrap();
        let c = projections.conservative.volumes();
        assert_eq!(c.len(), 8);
        assert_eq!(c[0], 304083.0);
        assert_eq!(c[1], 304093.0);
        assert_eq!(c[3], 304173.0);
        assert_eq!(c[7], 304083.0 + 490.0);
    }

    #[test]
    fn test_aggressive_values() {
        let projections = ProjectionEngine::default().project(304083.0, anchor()).unwrap();
        let a = projections.aggressive.volumes();
        assert_eq!(a.len(), 8);
        assert_eq!(a[0], 304083.0);
        assert_eq!(a[1], 304184.0);
        assert_eq!(a[2], 304299.0);
        assert_eq!(a[7], 304083.0 + 700.0 + 2401.0);
    }

    #[test]
    fn test_dates_step_one_day_from_anchor() {
        let projections = ProjectionEngine::default().project(304083.0, anchor()).unwrap();
        let dates: Vec<NaiveDateTime> = projections.conservative.points.iter().map(|p| p.date).collect();
        assert_eq!(dates[0], anchor());
        assert_eq!(
            dates[7],
            NaiveDate::from_ymd_opt(2023, 2, 23)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        );
        let aggressive_dates: Vec<NaiveDateTime> =
            projections.aggressive.points.iter().map(|p| p.date).collect();
        assert_eq!(dates, aggressive_dates);
    }

    #[test]
    fn test_custom_length() {
        let projections = ProjectionEngine::new(3).unwrap().project(100.0, anchor()).unwrap();
        assert_eq!(projections.conservative.len(), 3);
        assert_eq!(projections.aggressive.len(), 3);
    }

    #[test]
    fn test_deterministic() {
        let engine = ProjectionEngine::default();
        assert_eq!(
            engine.project(1.0, anchor()).unwrap(),
            engine.project(1.0, anchor()).unwrap()
        );
    }

    #[test]
    fn test_length_bounds() {
        assert!(matches!(ProjectionEngine::new(0), Err(DashboardError::InvalidConfig(_))));
        assert_eq!(ProjectionEngine::new(MAX_PROJECTION_DAYS).unwrap().days(), 366);
        assert!(matches!(
            ProjectionEngine::new(MAX_PROJECTION_DAYS + 1),
            Err(DashboardError::InvalidConfig(_))
        ));
        assert!(ProjectionEngine::new(usize::MAX).is_err());
    }

    #[test]
    fn test_overflowing_dates_are_an_error() {
        let near_end = NaiveDateTime::MAX - TimeDelta::days(3);
        let err = ProjectionEngine::default().project(100.0, near_end).unwrap_err();
        assert!(matches!(err, DashboardError::ProjectionOverflow { days: 8, .. }));

        let fits = ProjectionEngine::new(4).unwrap().project(100.0, near_end).unwrap();
        assert_eq!(fits.aggressive.len(), 4);
    }
}
