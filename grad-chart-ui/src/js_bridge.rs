//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart code lives in `assets/js/*.js` and is embedded at compile
//! time. The scripts are evaluated as globals (no ES modules) once D3 has
//! loaded, and exposed via `window.*`. Outside the browser every call is a
//! no-op so components can be rendered on the server and in tests.

use wasm_bindgen::JsValue;

// Embed the D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static STACKED_BAR_CHART_JS: &str = include_str!("../assets/js/stacked-bar-chart.js");

#[cfg(target_arch = "wasm32")]
fn eval(code: &str) -> Result<JsValue, JsValue> {
    js_sys::eval(code)
}

#[cfg(not(target_arch = "wasm32"))]
fn eval(_code: &str) -> Result<JsValue, JsValue> {
    Ok(JsValue::UNDEFINED)
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('grad-chart-ui JS call failed:', e); }}",
        code
    );
    if let Err(err) = eval(&wrapped) {
        log::warn!("JS evaluation failed: {:?}", err);
    }
}

/// Quote a JSON payload as a single-quoted JS string literal.
fn js_string_literal(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
        .replace('\r', "")
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions via `function` declarations. They are
/// stashed on `window` and evaluated at global scope with an indirect eval
/// once D3 is ready, then promoted to `window.*` explicitly. Safe to call more
/// than once; later calls are ignored.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, STACKED_BAR_CHART_JS].join("\n");

    let store_js = match serde_json::to_string(&all_js) {
        Ok(scripts) => format!(
            "if (!window.__gradChartsReady && !window.__gradChartScripts) {{ window.__gradChartScripts = {}; }}",
            scripts
        ),
        Err(err) => {
            log::error!("Failed to encode chart scripts: {}", err);
            return;
        }
    };
    call_js(&store_js);

    let init_js = r#"
        (function() {
            if (window.__gradChartsReady || window.__gradChartsPolling) return;
            window.__gradChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && window.__gradChartScripts) {
                    clearInterval(waitForD3);
                    (0, eval)(window.__gradChartScripts);
                    delete window.__gradChartScripts;
                    if (typeof renderStackedBarChart !== 'undefined') window.renderStackedBarChart = renderStackedBarChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__gradChartsReady = true;
                    window.__gradChartsPolling = false;
                    console.log('grad charts initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

/// Render a stacked bar chart into `container_id`.
///
/// Polls until D3.js is loaded, the chart scripts are initialized and the
/// container element exists, then renders.
pub fn render_stacked_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("Scheduling stacked bar chart render into #{}", container_id);
    call_js(&render_script(container_id, data_json, config_json));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_script(container_id));
}

/// Single-quoted JS literal for a DOM id, safe for any id text.
fn quoted_id(container_id: &str) -> String {
    format!("'{}'", js_string_literal(container_id))
}

fn render_script(container_id: &str, data_json: &str, config_json: &str) -> String {
    let id = quoted_id(container_id);
    let escaped_data = js_string_literal(data_json);
    let escaped_config = js_string_literal(config_json);
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gradChartsReady &&
                    typeof window.renderStackedBarChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderStackedBarChart({id}, '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[grad] renderStackedBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

fn destroy_script(container_id: &str) -> String {
    format!(
        "(function() {{ var el = document.getElementById({}); if (!el) return; \
         if (el.__gradResizeObserver) {{ el.__gradResizeObserver.disconnect(); delete el.__gradResizeObserver; }} \
         el.innerHTML = ''; }})();",
        quoted_id(container_id)
    )
}
