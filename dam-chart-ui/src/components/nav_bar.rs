//! Button-style navigation links for the current page.

use crate::state::AppState;
use dam_core::router::Page;
use dioxus::prelude::*;

const NAV_LINK_STYLE: &str = "padding: 10px 15px; background-color: #007BFF; color: white; border-radius: 5px; text-decoration: none; display: inline-block; margin: 5px;";

#[derive(Props, Clone, PartialEq)]
pub struct NavBarProps {
    pub page: Page,
}

/// Renders `page.nav_links()`. Clicks stay inside the app: the default
/// navigation is cancelled and the history entry is pushed instead.
#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            style: "color: #000000; padding: 5px; text-align: center;",
            for link in props.page.nav_links().iter() {
                a {
                    key: "{link.target.path()}",
                    href: "{link.target.path()}",
                    style: NAV_LINK_STYLE,
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        let mut state = state;
                        state.navigate(link.target.path());
                    },
                    "{link.label}"
                }
            }
        }
    }
}
