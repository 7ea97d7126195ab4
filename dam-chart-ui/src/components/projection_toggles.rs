//! Checklist controlling which projection curves are drawn.

use crate::state::AppState;
use dioxus::prelude::*;

/// Two checkboxes bound to `AppState::toggles`. Both start unchecked.
#[component]
pub fn ProjectionToggles() -> Element {
    let mut state = use_context::<AppState>();
    let toggles = (state.toggles)();

    rsx! {
        div {
            id: "toggle-projections",
            style: "margin: 8px 0; display: flex; gap: 12px; justify-content: center;",
            label {
                input {
                    r#type: "checkbox",
                    value: "CP",
                    checked: toggles.conservative,
                    onchange: move |_| state.toggles.with_mut(|t| t.conservative = !t.conservative),
                }
                " Show Conservative Projection"
            }
            label {
                input {
                    r#type: "checkbox",
                    value: "AP",
                    checked: toggles.aggressive,
                    onchange: move |_| state.toggles.with_mut(|t| t.aggressive = !t.aggressive),
                }
                " Show Aggressive Projection"
            }
        }
    }
}
