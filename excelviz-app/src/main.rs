//! ExcelViz Pro
//!
//! Upload a spreadsheet or CSV file, preview it, chart selected columns with
//! plotly.js (line, bar, pie, or map), and download the result as a
//! standalone `plot.html`.
//!
//! Data flow:
//! 1. The upload widget reads the file bytes into `AppState.file`.
//! 2. A memo re-runs the whole core pipeline on every widget change,
//!    re-deriving the table, figures, and export link from scratch.
//! 3. An effect hands each figure to plotly.js through the JS bridge.

use dioxus::prelude::*;
use excelviz_chart_ui::components::{
    ChartContainer, ChartKindSelector, ColumnSelector, DataPreview, DownloadLink, ErrorDisplay,
    FileUpload, PageBackground, RoleSelector, WarningDisplay,
};
use excelviz_chart_ui::js_bridge;
use excelviz_chart_ui::state::AppState;
use excelviz_core::{run_cycle, ChartKind, Request};

/// Decorative background asset, embedded at compile time. A missing asset
/// fails the build, not the running page.
const BACKGROUND_IMAGE: &str = include_str!("../assets/background.svg");

/// Chart container DOM ids are this prefix plus the figure index.
const CHART_CONTAINER_PREFIX: &str = "excelviz-chart-";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("excelviz-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // ─── Full pipeline re-evaluation on every widget change ───
    let cycle = use_memo(move || {
        let request = Request {
            file: state.file.read().clone(),
            selected_columns: state.selected_columns.read().clone(),
            chart: state.chart_spec(),
        };
        run_cycle(&request)
    });

    // ─── Keep role bindings pointing at offered columns ───
    // Bar/Pie roles bind from the selection, Map roles from the full table.
    use_effect(move || {
        let out = cycle();
        let Some(table) = out.table else {
            return;
        };
        let all_columns = table.column_names();
        let selected = state.selected_columns.peek().clone();
        for binding in [state.bar_x, state.bar_y, state.pie_values, state.pie_labels] {
            rebind_if_stale(binding, &selected);
        }
        for binding in [state.map_latitude, state.map_longitude] {
            rebind_if_stale(binding, &all_columns);
        }
    });

    // ─── Hand figures to plotly.js once their containers exist ───
    use_effect(move || {
        let out = cycle();
        if out.figures.is_empty() {
            return;
        }
        js_bridge::init_plotly();
        for (i, figure) in out.figures.iter().enumerate() {
            js_bridge::render_figure(
                &format!("{CHART_CONTAINER_PREFIX}{i}"),
                &figure.to_json(),
            );
        }
    });

    // ─── Render ───
    let out = cycle();
    let has_file = state.file.read().is_some();
    let kind = (state.chart_kind)();
    let selected = state.selected_columns.read().clone();
    let all_columns = out
        .table
        .as_ref()
        .map(|t| t.column_names())
        .unwrap_or_default();

    rsx! {
        PageBackground { image: BACKGROUND_IMAGE.to_string() }
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 16px 24px; min-height: 100vh; background: rgba(255, 255, 255, 0.9); font-family: system-ui, -apple-system, sans-serif;",

            h1 { style: "margin: 0 0 4px 0;", "ExcelViz Pro 📈" }
            h3 { style: "margin: 0 0 12px 0; color: #444; font-weight: normal;",
                "Upload an Excel file for analysis and visualization"
            }

            FileUpload {}

            if has_file {
                hr { style: "margin: 12px 0; border: none; border-top: 1px solid #e0e0e0;" }
                h3 { "Data Analysis and Visualization:" }
            }

            if let Some(message) = out.error.clone() {
                ErrorDisplay { message }
            }

            if let Some(table) = out.table.clone() {
                DataPreview { table: table.clone() }
                ColumnSelector { options: table.column_names() }

                if let Some(message) = out.warning.clone() {
                    WarningDisplay { message }
                } else {
                    ChartKindSelector {}
                    h3 { "{kind.label()}:" }

                    match kind {
                        ChartKind::Line => rsx! {},
                        ChartKind::Bar => rsx! {
                            RoleSelector {
                                label: "Select X-Axis Column".to_string(),
                                options: selected.clone(),
                                binding: state.bar_x,
                            }
                            RoleSelector {
                                label: "Select Y-Axis Column".to_string(),
                                options: selected.clone(),
                                binding: state.bar_y,
                            }
                        },
                        ChartKind::Pie => rsx! {
                            RoleSelector {
                                label: "Select Values Column".to_string(),
                                options: selected.clone(),
                                binding: state.pie_values,
                            }
                            RoleSelector {
                                label: "Select Labels Column".to_string(),
                                options: selected.clone(),
                                binding: state.pie_labels,
                            }
                        },
                        ChartKind::Map => rsx! {
                            RoleSelector {
                                label: "Select Latitude Column".to_string(),
                                options: all_columns.clone(),
                                binding: state.map_latitude,
                            }
                            RoleSelector {
                                label: "Select Longitude Column".to_string(),
                                options: all_columns.clone(),
                                binding: state.map_longitude,
                            }
                        },
                    }

                    for i in 0..out.figures.len() {
                        ChartContainer {
                            id: format!("{CHART_CONTAINER_PREFIX}{i}"),
                            min_height: 450,
                        }
                    }

                    if let Some(href) = out.export_href.clone() {
                        h3 { "Downloads:" }
                        DownloadLink { href }
                    }
                }
            }
        }
    }
}

/// Point a role binding at the first offered column when its current value is
/// no longer in the offered set.
fn rebind_if_stale(mut binding: Signal<String>, options: &[String]) {
    let current = binding.peek().clone();
    if options.iter().any(|name| *name == current) {
        return;
    }
    if let Some(first) = options.first() {
        binding.set(first.clone());
    }
}
