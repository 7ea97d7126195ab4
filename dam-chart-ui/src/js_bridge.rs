//! Typed wrappers around browser interop.
//!
//! The D3.js chart function lives in `assets/js/projection-chart.js` and is
//! evaluated at global scope once D3 has loaded. Downloads and history go
//! through `web-sys` or small `js_sys::eval()` snippets.

use dioxus::document::{self, Eval};
use log::warn;
use wasm_bindgen::JsValue;

/// DOM id for the chart container div on the graph page.
pub const CHART_CONTAINER_ID: &str = "water-level-graph";

/// D3 v7 from the public CDN.
pub const D3_SRC: &str = "https://d3js.org/d3.v7.min.js";

static PROJECTION_CHART_JS: &str = include_str!("../assets/js/projection-chart.js");

/// Forwards the pathname to Rust on every back/forward navigation.
const POPSTATE_LISTENER_JS: &str = r#"
window.addEventListener('popstate', function() {
    dioxus.send(window.location.pathname);
});
"#;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Dashboard JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The chart function is evaluated at global scope via indirect eval once
/// D3 is ready and then promoted to `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "window.__damChartScripts = {};",
        js_string(PROJECTION_CHART_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__damChartScripts);
                    delete window.__damChartScripts;
                    if (typeof renderProjectionChart !== 'undefined') window.renderProjectionChart = renderProjectionChart;
                    window.__damChartsReady = true;
                    console.log('Dashboard charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Give up on a pending render after this many 100ms polls.
const RENDER_POLL_ATTEMPTS: u32 = 100;

/// Render a serialized `ChartSpec` into `container_id`.
///
/// Polls until D3 has loaded, the chart script is initialized and the
/// container exists in the DOM. A newer render or [`destroy_chart`] cancels
/// the pending poll.
pub fn render_projection_chart(container_id: &str, spec_json: &str) {
    call_js(&render_chart_js(container_id, spec_json));
}

fn render_chart_js(container_id: &str, spec_json: &str) -> String {
    let id = js_string(container_id);
    let spec = js_string(spec_json);
    format!(
        r#"
        (function() {{
            if (window.__damChartPoll) clearInterval(window.__damChartPoll);
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts += 1;
                if (window.__damChartsReady &&
                    typeof window.renderProjectionChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    window.__damChartPoll = null;
                    try {{
                        window.renderProjectionChart({id}, {spec});
                    }} catch(e) {{ console.error('[Dashboard] renderProjectionChart error:', e); }}
                }} else if (attempts >= {max}) {{
                    clearInterval(poll);
                    window.__damChartPoll = null;
                    console.warn('[Dashboard] chart not rendered: D3 or container unavailable');
                }}
            }}, 100);
            window.__damChartPoll = poll;
        }})();
        "#,
        max = RENDER_POLL_ATTEMPTS,
    )
}

/// Destroy/clean up a chart in the given container, cancelling any render
/// still waiting on it.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_chart_js(container_id));
}

fn destroy_chart_js(container_id: &str) -> String {
    format!(
        "if (window.__damChartPoll) {{ clearInterval(window.__damChartPoll); window.__damChartPoll = null; }} \
         var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    )
}

/// Offer `content` to the user as a file download.
pub fn download_file(filename: &str, mime_type: &str, content: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var blob = new Blob([{content}], {{ type: {mime} }});
            var url = URL.createObjectURL(blob);
            var link = document.createElement('a');
            link.href = url;
            link.download = {name};
            document.body.appendChild(link);
            link.click();
            link.remove();
            URL.revokeObjectURL(url);
        }})();
        "#,
        content = js_string(content),
        mime = js_string(mime_type),
        name = js_string(filename),
    ));
}

/// Current `window.location.pathname`, or `/` outside a browser.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push `path` onto the browser history without reloading.
pub fn push_path(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let pushed = window
        .history()
        .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)));
    if let Err(e) = pushed {
        warn!("Failed to push history state for {}: {:?}", path, e);
    }
}

/// Start listening for back/forward navigation. Each `recv::<String>()` on
/// the returned handle yields the new pathname.
pub fn history_listener() -> Eval {
    document::eval(POPSTATE_LISTENER_JS)
}
