//! Event handlers for the dashboard.
//!
//! A [`Dashboard`] is constructed once from an injected configuration and
//! data source. Each user action is a [`DashboardEvent`]; handling it is a
//! pure function of the immutable dashboard and the event payload.

use crate::chart::{ChartBuilder, ChartSpec, ToggleSelection};
use crate::condition::{Condition, ConditionClassifier};
use crate::conditions::{ConditionsProvider, CurrentConditions, StaticConditions};
use crate::config::DashboardConfig;
use crate::data_source::DataSource;
use crate::error::Result;
use crate::export::{ExportFile, ExportService};
use crate::projection::{ProjectionEngine, Projections};
use crate::router::{self, Page};
use log::debug;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// The URL path changed (initial load, link click, back/forward)
    NavigationChanged(String),
    /// The projection checklist changed
    ToggleChanged(ToggleSelection),
    /// The "Download Data" button was pressed
    ExportClicked,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardOutput {
    View(Page),
    Chart(ChartSpec),
    Download(ExportFile),
}

/// Latest volume and its condition, for the home page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterLevel {
    pub volume: f64,
    pub condition: Condition,
}

/// Read-only dashboard state shared by every view. Cheap to clone.
#[derive(Clone)]
pub struct Dashboard {
    config: Arc<DashboardConfig>,
    data: Arc<DataSource>,
    conditions: Arc<dyn ConditionsProvider + Send + Sync>,
    classifier: ConditionClassifier,
    engine: ProjectionEngine,
    charts: ChartBuilder,
    exporter: ExportService,
}

impl Dashboard {
    /// Validate `config` and wire every component from it. Current
    /// conditions default to [`StaticConditions`].
    pub fn new(config: DashboardConfig, data: DataSource) -> Result<Self> {
        config.validate()?;
        let classifier = ConditionClassifier::new(config.thresholds);
        let conditions = StaticConditions::new(&data, &classifier, config.weather.clone());
        Ok(Self {
            classifier,
            engine: ProjectionEngine::new(config.projection_days)?,
            charts: ChartBuilder::new(),
            exporter: ExportService::new(config.export_filename.clone()),
            conditions: Arc::new(conditions),
            config: Arc::new(config),
            data: Arc::new(data),
        })
    }

    /// Default configuration over the embedded sample.
    pub fn sample() -> Result<Self> {
        Self::new(DashboardConfig::default(), DataSource::sample()?)
    }

    /// Replace the current-conditions source.
    pub fn with_conditions<P>(mut self, provider: P) -> Self
    where
        P: ConditionsProvider + Send + Sync + 'static,
    {
        self.conditions = Arc::new(provider);
        self
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn data(&self) -> &DataSource {
        &self.data
    }

    pub fn handle(&self, event: DashboardEvent) -> Result<DashboardOutput> {
        debug!("Handling {:?}", event);
        let output = match event {
            DashboardEvent::NavigationChanged(path) => DashboardOutput::View(self.page(&path)),
            DashboardEvent::ToggleChanged(toggles) => DashboardOutput::Chart(self.chart(toggles)?),
            DashboardEvent::ExportClicked => DashboardOutput::Download(self.export()?),
        };
        Ok(output)
    }

    pub fn page(&self, path: &str) -> Page {
        router::resolve(path)
    }

    /// Heading for a page; the home heading is configurable.
    pub fn page_title(&self, page: Page) -> &str {
        match page {
            Page::Home => &self.config.title,
            other => other.title(),
        }
    }

    pub fn classify(&self, volume: f64) -> Condition {
        self.classifier.classify(volume)
    }

    pub fn water_level(&self) -> WaterLevel {
        let volume = self.data.latest().volume;
        WaterLevel {
            volume,
            condition: self.classify(volume),
        }
    }

    pub fn current_conditions(&self) -> CurrentConditions {
        self.conditions.current_conditions()
    }

    pub fn projections(&self) -> Result<Projections> {
        let latest = self.data.latest();
        self.engine.project(latest.volume, latest.timestamp)
    }

    pub fn chart(&self, toggles: ToggleSelection) -> Result<ChartSpec> {
        Ok(self.charts.build(&self.data, &self.projections()?, toggles))
    }

    pub fn export(&self) -> Result<ExportFile> {
        self.exporter.export(&self.data)
    }
}

impl fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dashboard")
            .field("config", &self.config)
            .field("points", &self.data.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Thresholds;
    use crate::data_source::TimeSeriesPoint;
    use crate::error::DashboardError;
    use chrono::{NaiveDateTime, TimeDelta};

    struct FixedWeather;

    impl ConditionsProvider for FixedWeather {
        fn current_conditions(&self) -> CurrentConditions {
            CurrentConditions {
                current_water_level: "1 acre-ft".to_string(),
                current_water_state: Condition::SevereDrought,
                weather: "Rain, 50°F".to_string(),
            }
        }
    }

    #[test]
    fn test_navigation_events() {
        let dashboard = Dashboard::sample().unwrap();
        let cases = [
            ("/water-level-graph", Page::Graph),
            ("/faq", Page::Faq),
            ("/", Page::Home),
            ("/unknown", Page::Home),
        ];
        for (path, expected) in cases {
            let output = dashboard
                .handle(DashboardEvent::NavigationChanged(path.to_string()))
                .unwrap();
            assert_eq!(output, DashboardOutput::View(expected));
        }
    }

    #[test]
    fn test_toggle_event_rebuilds_chart() {
        let dashboard = Dashboard::sample().unwrap();
        let toggles = ToggleSelection::from_values(["AP"]);
        let output = dashboard.handle(DashboardEvent::ToggleChanged(toggles)).unwrap();
        let DashboardOutput::Chart(chart) = output else {
            panic!("expected a chart");
        };
        assert!(!chart.conservative().visible);
        assert!(chart.aggressive().visible);
        assert_eq!(chart, dashboard.chart(toggles).unwrap());
    }

    #[test]
    fn test_export_event() {
        let dashboard = Dashboard::sample().unwrap();
        let output = dashboard.handle(DashboardEvent::ExportClicked).unwrap();
        let DashboardOutput::Download(file) = output else {
            panic!("expected a download");
        };
        assert_eq!(file.filename, "my_data.csv");
        assert_eq!(file.as_str().unwrap().lines().count(), 9);
    }

    #[test]
    fn test_water_level() {
        let dashboard = Dashboard::sample().unwrap();
        let level = dashboard.water_level();
        assert_eq!(level.volume, 304083.0);
        assert_eq!(level.condition, Condition::ExceptionalHealth);
        assert_eq!(dashboard.current_conditions().weather, "Sunny, 75°F");
    }

    #[test]
    fn test_configuration_is_injected() {
        let config = DashboardConfig {
            title: "Lake Test".to_string(),
            projection_days: 4,
            thresholds: Thresholds {
                exceptional: 400_000.0,
                ..Thresholds::default()
            },
            export_filename: "lake.csv".to_string(),
            weather: "Windy".to_string(),
        };
        let dashboard = Dashboard::new(config, DataSource::sample().unwrap()).unwrap();
        assert_eq!(dashboard.page_title(Page::Home), "Lake Test");
        assert_eq!(dashboard.page_title(Page::Faq), "FAQ / How to");
        assert_eq!(dashboard.projections().unwrap().conservative.len(), 4);
        assert_eq!(dashboard.water_level().condition, Condition::Healthy);
        assert_eq!(dashboard.export().unwrap().filename, "lake.csv");
        assert_eq!(dashboard.current_conditions().weather, "Windy");
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        let config = DashboardConfig {
            projection_days: 0,
            ..DashboardConfig::default()
        };
        assert!(Dashboard::new(config, DataSource::sample().unwrap()).is_err());
    }

    #[test]
    fn test_toggle_event_near_calendar_end_is_an_error() {
        let point = TimeSeriesPoint {
            timestamp: NaiveDateTime::MAX - TimeDelta::days(3),
            volume: 250_000.0,
            dam_name: "Test Dam".to_string(),
        };
        let data = DataSource::from_points(vec![point]).unwrap();
        let dashboard = Dashboard::new(DashboardConfig::default(), data).unwrap();

        let err = dashboard
            .handle(DashboardEvent::ToggleChanged(ToggleSelection::none()))
            .unwrap_err();
        assert!(matches!(err, DashboardError::ProjectionOverflow { .. }));
        assert!(dashboard.export().is_ok());
    }

    #[test]
    fn test_custom_conditions_provider() {
        let dashboard = Dashboard::sample().unwrap().with_conditions(FixedWeather);
        assert_eq!(dashboard.current_conditions().weather, "Rain, 50°F");
    }

    #[test]
    fn test_clones_share_data() {
        let dashboard = Dashboard::sample().unwrap();
        let clone = dashboard.clone();
        assert!(std::ptr::eq(dashboard.data(), clone.data()));
    }
}
