//! Core library for the dam monitoring dashboard.
//!
//! Everything the web app and the CLI render is computed here, synchronously
//! and from immutable inputs:
//! - `data_source`: the fixed time series (and validated external loads)
//! - `condition`: volume thresholds mapped to a condition and display color
//! - `projection`: conservative and aggressive forward curves
//! - `chart`: the renderable chart description handed to D3.js
//! - `router`: URL path to page dispatch, navigation links and FAQ content
//! - `export`: CSV serialization of the data source
//! - `conditions`: the current-conditions provider seam
//! - `dashboard`: event handlers tying the pieces together

pub mod chart;
pub mod condition;
pub mod conditions;
pub mod config;
pub mod dashboard;
pub mod data_source;
pub mod error;
pub mod export;
pub mod format;
pub mod projection;
pub mod router;

pub use dashboard::{Dashboard, DashboardEvent, DashboardOutput};
pub use error::{DashboardError, Result};
