//! Static FAQ questions and answers.

use dam_core::router::FAQ_ENTRIES;
use dioxus::prelude::*;

#[component]
pub fn FaqList() -> Element {
    rsx! {
        div {
            style: "text-align: center;",
            for entry in FAQ_ENTRIES.iter() {
                div {
                    key: "{entry.question}",
                    h3 { "{entry.question}" }
                    p { "{entry.answer}" }
                }
            }
        }
    }
}
