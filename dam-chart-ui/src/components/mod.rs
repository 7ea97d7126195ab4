//! Reusable Dioxus RSX components for the dashboard pages.

mod chart_container;
mod current_conditions;
mod download_button;
mod error_display;
mod faq_list;
mod loading_spinner;
mod nav_bar;
mod page_header;
mod projection_toggles;
mod water_level_info;

pub use chart_container::ChartContainer;
pub use current_conditions::CurrentConditionsPanel;
pub use download_button::DownloadButton;
pub use error_display::ErrorDisplay;
pub use faq_list::FaqList;
pub use loading_spinner::LoadingSpinner;
pub use nav_bar::NavBar;
pub use page_header::PageHeader;
pub use projection_toggles::ProjectionToggles;
pub use water_level_info::WaterLevelInfo;
