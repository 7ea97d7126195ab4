//! Current volume (in its condition color) and condition label.

use crate::state::AppState;
use dam_core::format::volume::format_volume;
use dioxus::prelude::*;

#[component]
pub fn WaterLevelInfo() -> Element {
    let state = use_context::<AppState>();
    let Some(level) = state.dashboard.read().as_ref().map(|d| d.water_level()) else {
        return rsx! {};
    };
    let color = level.condition.color().css_name();
    let volume = format_volume(level.volume);
    let label = level.condition.label();

    rsx! {
        div {
            p {
                style: "color: {color}; text-align: center;",
                "Current Water Volume: {volume} acre-feet"
            }
            p {
                style: "text-align: center;",
                "Current Water State: {label}"
            }
        }
    }
}
