//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dam_core::chart::ToggleSelection;
use dam_core::router::{resolve, Page};
use dam_core::{Dashboard, DashboardEvent, DashboardOutput};
use dioxus::prelude::*;
use log::debug;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Dashboard instance (None until the data source has loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Page resolved from the current URL path
    pub page: Signal<Page>,
    /// Projection checklist selection, empty by default
    pub toggles: Signal<ToggleSelection>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            page: Signal::new(Page::Home),
            toggles: Signal::new(ToggleSelection::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Follow an in-app link: push the path onto the history and re-resolve
    /// the page.
    pub fn navigate(&mut self, path: &str) {
        crate::js_bridge::push_path(path);
        self.apply_path(path);
    }

    /// Re-resolve the page for `path` without touching the history (initial
    /// load, back/forward).
    pub fn apply_path(&mut self, path: &str) {
        let event = DashboardEvent::NavigationChanged(path.to_string());
        let resolved = match self.dashboard.peek().as_ref() {
            Some(dashboard) => match dashboard.handle(event) {
                Ok(DashboardOutput::View(page)) => page,
                _ => resolve(path),
            },
            None => resolve(path),
        };
        debug!("Navigated to {} ({})", path, resolved);
        self.page.set(resolved);
    }
}
