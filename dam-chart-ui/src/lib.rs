//! Dioxus components and browser bridge for the dam monitoring dashboard.
//!
//! This crate provides:
//! - `js_bridge`: D3.js chart rendering, file downloads and history access
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (navigation, toggles, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
