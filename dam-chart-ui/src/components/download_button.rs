//! "Download Data" button.

use crate::js_bridge;
use crate::state::AppState;
use dam_core::{DashboardEvent, DashboardOutput};
use dioxus::prelude::*;
use log::error;

/// Exports the data source and hands the CSV to the browser. A failed
/// export is shown in the error display and nothing is downloaded.
#[component]
pub fn DownloadButton() -> Element {
    let mut state = use_context::<AppState>();

    let on_click = move |_: MouseEvent| {
        let result = match state.dashboard.peek().as_ref() {
            Some(dashboard) => dashboard.handle(DashboardEvent::ExportClicked),
            None => return,
        };
        match result {
            Ok(DashboardOutput::Download(file)) => match file.as_str() {
                Ok(content) => {
                    js_bridge::download_file(&file.filename, file.mime_type, content);
                    state.error_msg.set(None);
                }
                Err(e) => {
                    error!("Download failed: {}", e);
                    state.error_msg.set(Some(format!("Download failed: {}", e)));
                }
            },
            Ok(_) => {}
            Err(e) => {
                error!("Download failed: {}", e);
                state.error_msg.set(Some(format!("Download failed: {}", e)));
            }
        }
    };

    rsx! {
        div {
            style: "text-align: center; margin: 8px 0;",
            button {
                id: "btn_download",
                onclick: on_click,
                "Download Data"
            }
        }
    }
}
