//! Centered page heading.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    pub title: String,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        h1 {
            style: "padding: 5px; text-align: center;",
            "{props.title}"
        }
    }
}
