//! Dam Monitoring Dashboard
//!
//! Three pages served from one WASM bundle:
//! - `/`: current volume, condition and weather
//! - `/water-level-graph`: D3.js chart of the actual series with optional
//!   conservative/aggressive projections, plus the CSV download
//! - `/faq`: static questions and answers
//!
//! Data flow:
//! 1. On mount: build the `Dashboard` from the embedded sample and resolve
//!    the page from the path present at load time.
//! 2. Link clicks push history and re-resolve; back/forward arrive through a
//!    `popstate` listener.
//! 3. On the graph page every toggle change rebuilds the full chart and
//!    re-renders it via D3.js.

use dam_chart_ui::components::{
    ChartContainer, CurrentConditionsPanel, DownloadButton, ErrorDisplay, FaqList,
    LoadingSpinner, NavBar, PageHeader, ProjectionToggles, WaterLevelInfo,
};
use dam_chart_ui::js_bridge::{self, CHART_CONTAINER_ID};
use dam_chart_ui::state::AppState;
use dam_core::router::Page;
use dam_core::{Dashboard, DashboardEvent, DashboardOutput};
use dioxus::prelude::*;
use log::{error, info};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dam-dashboard-root"))
        .launch(App);
}

/// Heading for `page`, from the dashboard configuration when loaded.
fn page_title(state: &AppState, page: Page) -> String {
    state
        .dashboard
        .read()
        .as_ref()
        .map(|d| d.page_title(page).to_string())
        .unwrap_or_else(|| page.title().to_string())
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Build the dashboard once on mount ───
    use_effect(move || {
        match Dashboard::sample() {
            Ok(dashboard) => {
                info!("Dashboard ready for {}", dashboard.data().dam_name());
                state.dashboard.set(Some(dashboard));
            }
            Err(e) => {
                error!("Failed to load reservoir data: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load reservoir data: {}", e)));
            }
        }

        // Initial page comes from the path present at load time.
        state.apply_path(&js_bridge::current_path());
        state.loading.set(false);

        js_bridge::init_charts();
    });

    // ─── Back/forward navigation ───
    use_future(move || async move {
        let mut state = state;
        let mut history = js_bridge::history_listener();
        while let Ok(path) = history.recv::<String>().await {
            state.apply_path(&path);
        }
    });

    let page = (state.page)();

    rsx! {
        document::Script { src: js_bridge::D3_SRC }

        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                {
                    match page {
                        Page::Home => rsx! { HomePage {} },
                        Page::Graph => rsx! { GraphPage {} },
                        Page::Faq => rsx! { FaqPage {} },
                    }
                }
            }
        }
    }
}

#[component]
fn HomePage() -> Element {
    let state = use_context::<AppState>();
    let title = page_title(&state, Page::Home);

    rsx! {
        PageHeader { title }
        NavBar { page: Page::Home }
        WaterLevelInfo {}
        CurrentConditionsPanel {}
    }
}

#[component]
fn GraphPage() -> Element {
    let state = use_context::<AppState>();
    let title = page_title(&state, Page::Graph);

    // ─── Rebuild and re-render the whole chart on every toggle change ───
    use_effect(move || {
        let toggles = (state.toggles)();
        let output = match state.dashboard.read().as_ref() {
            Some(dashboard) => dashboard.handle(DashboardEvent::ToggleChanged(toggles)),
            None => return,
        };

        match output {
            Ok(DashboardOutput::Chart(chart)) => match chart.to_json() {
                Ok(spec_json) => js_bridge::render_projection_chart(CHART_CONTAINER_ID, &spec_json),
                Err(e) => error!("Failed to serialize chart: {}", e),
            },
            Ok(other) => error!("Unexpected output for toggle change: {:?}", other),
            Err(e) => error!("Failed to build chart: {}", e),
        }
    });

    use_drop(|| js_bridge::destroy_chart(CHART_CONTAINER_ID));

    rsx! {
        PageHeader { title }
        NavBar { page: Page::Graph }
        ProjectionToggles {}
        DownloadButton {}
        ChartContainer {
            id: CHART_CONTAINER_ID.to_string(),
            loading: state.dashboard.read().is_none(),
        }
    }
}

#[component]
fn FaqPage() -> Element {
    let state = use_context::<AppState>();
    let title = page_title(&state, Page::Faq);

    rsx! {
        PageHeader { title }
        NavBar { page: Page::Faq }
        FaqList {}
    }
}
