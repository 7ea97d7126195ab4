//! URL path dispatch.
//!
//! Three pages, selected purely by path. Unknown paths fall back to Home
//! rather than a not-found page.

use serde::Serialize;
use std::fmt;

pub const HOME_PATH: &str = "/";
pub const GRAPH_PATH: &str = "/water-level-graph";
pub const FAQ_PATH: &str = "/faq";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Page {
    #[default]
    Home,
    Graph,
    Faq,
}

/// A button-style link in a page's navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Page,
}

/// A question and its answer on the FAQ page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ_ENTRIES: [FaqEntry; 3] = [
    FaqEntry {
        question: "How do I reset page?",
        answer: "Click home icon in top right corner",
    },
    FaqEntry {
        question: "How can I check individual data points?",
        answer: "Hover over data points to see details regarding each unit.",
    },
    FaqEntry {
        question: "How often does data update?",
        answer: "Data will be requested from our provider each time the page is refreshed.",
    },
];

const HOME_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Go to Water Level Graph",
        target: Page::Graph,
    },
    NavLink {
        label: "FAQ / How to",
        target: Page::Faq,
    },
];

const GRAPH_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Return Home",
        target: Page::Home,
    },
    NavLink {
        label: "FAQ / How to",
        target: Page::Faq,
    },
];

const FAQ_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Go back to Home",
        target: Page::Home,
    },
    NavLink {
        label: "Go to Water Level Graph",
        target: Page::Graph,
    },
];

/// Map a URL path to a page. Anything unrecognised, including `/`, is Home.
pub fn resolve(path: &str) -> Page {
    match path {
        GRAPH_PATH => Page::Graph,
        FAQ_PATH => Page::Faq,
        _ => Page::Home,
    }
}

impl Page {
    /// Canonical path for links to this page.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => HOME_PATH,
            Page::Graph => GRAPH_PATH,
            Page::Faq => FAQ_PATH,
        }
    }

    /// Default page heading. `Dashboard::page_title` replaces the home
    /// heading with the configured title.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Dam Monitoring Dashboard",
            Page::Graph => "Water Level Graph",
            Page::Faq => "FAQ / How to",
        }
    }

    pub fn nav_links(&self) -> &'static [NavLink] {
        match self {
            Page::Home => &HOME_LINKS,
            Page::Graph => &GRAPH_LINKS,
            Page::Faq => &FAQ_LINKS,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::Home => "home",
            Page::Graph => "graph",
            Page::Faq => "faq",
        };
        f.write_str(name)
    }
}
