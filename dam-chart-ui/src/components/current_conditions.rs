//! Weather line from the conditions provider.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn CurrentConditionsPanel() -> Element {
    let state = use_context::<AppState>();
    let Some(conditions) = state
        .dashboard
        .read()
        .as_ref()
        .map(|d| d.current_conditions())
    else {
        return rsx! {};
    };

    rsx! {
        div {
            id: "current-conditions",
            style: "color: #000000; padding: 5px; text-align: center;",
            p { "Current weather: {conditions.weather}" }
        }
    }
}
