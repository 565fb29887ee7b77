//! Typed wrappers around Plotly interop via `js_sys::eval()`.
//!
//! plotly.js is loaded from its CDN at runtime (the same bundle the exported
//! documents reference). Figures cross the boundary as JSON strings; every
//! call polls until the library and the target container are both ready.

use excelviz_core::export::PLOTLY_CDN_URL;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('ExcelViz JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject the plotly.js CDN script tag. Idempotent; call on every render
/// cycle that has figures.
pub fn init_plotly() {
    call_js(&format!(
        r#"
        if (!window.__excelvizPlotlyRequested) {{
            window.__excelvizPlotlyRequested = true;
            var script = document.createElement('script');
            script.src = '{PLOTLY_CDN_URL}';
            document.head.appendChild(script);
        }}
        "#
    ));
}

/// Render one figure (`{{"data": [...], "layout": {{...}}}}` JSON) into the
/// given container.
///
/// Uses a polling loop to wait for plotly.js to load and the container DOM
/// element to exist before rendering.
pub fn render_figure(container_id: &str, figure_json: &str) {
    let escaped = figure_json
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof Plotly !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        var figure = JSON.parse('{escaped}');
                        Plotly.newPlot('{container_id}', figure.data, figure.layout, {{responsive: true}});
                    }} catch(e) {{ console.error('[ExcelViz] render error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}
