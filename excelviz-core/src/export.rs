//! Standalone HTML export of the most recently built figure.
//!
//! The exported document references plotly.js from its CDN rather than
//! vendoring it, and is delivered as a base64 `data:` link so no server-side
//! artifact outlives the interaction cycle.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::chart::Figure;

/// Fixed filename the browser saves the exported document under.
pub const EXPORT_FILE_NAME: &str = "plot.html";

/// Label on the download link.
pub const EXPORT_LINK_LABEL: &str = "Download Plot";

/// Remote plotly.js bundle referenced by both the live page and exports.
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Serialize a figure to a self-contained HTML document.
pub fn figure_to_html(figure: &Figure) -> String {
    let data = serde_json::to_string(&figure.data).unwrap_or_default();
    let layout = serde_json::to_string(&figure.layout).unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<script src="{PLOTLY_CDN_URL}"></script>
</head>
<body>
<div id="plot" style="width:100%;height:100vh;"></div>
<script>Plotly.newPlot("plot", {data}, {layout}, {{"responsive": true}});</script>
</body>
</html>
"#
    )
}

/// Encode an HTML document as a clickable `data:` download href.
pub fn download_href(html: &str) -> String {
    format!("data:text/html;base64,{}", STANDARD.encode(html.as_bytes()))
}
