//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the raw widget inputs into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. Everything else (the table, figures, export
//! link) is derived from these signals on every interaction and never stored.

use dioxus::prelude::*;
use excelviz_core::{ChartKind, ChartSpec, UploadedFile};

/// Shared reactive state: the raw inputs of the current interaction cycle.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The uploaded file (None until the user picks one)
    pub file: Signal<Option<UploadedFile>>,
    /// Columns picked in the multiselect
    pub selected_columns: Signal<Vec<String>>,
    /// Which chart branch runs this cycle
    pub chart_kind: Signal<ChartKind>,
    /// Bar chart role bindings (drawn from the selected columns)
    pub bar_x: Signal<String>,
    pub bar_y: Signal<String>,
    /// Pie chart role bindings (drawn from the selected columns)
    pub pie_values: Signal<String>,
    pub pie_labels: Signal<String>,
    /// Map role bindings (drawn from the full table column set)
    pub map_latitude: Signal<String>,
    pub map_longitude: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            file: Signal::new(None),
            selected_columns: Signal::new(Vec::new()),
            chart_kind: Signal::new(ChartKind::Line),
            bar_x: Signal::new(String::new()),
            bar_y: Signal::new(String::new()),
            pie_values: Signal::new(String::new()),
            pie_labels: Signal::new(String::new()),
            map_latitude: Signal::new(String::new()),
            map_longitude: Signal::new(String::new()),
        }
    }

    /// Assemble the chart spec for the current cycle from the widget signals.
    pub fn chart_spec(&self) -> ChartSpec {
        match (self.chart_kind)() {
            ChartKind::Line => ChartSpec::Line,
            ChartKind::Bar => ChartSpec::Bar {
                x: (self.bar_x)(),
                y: (self.bar_y)(),
            },
            ChartKind::Pie => ChartSpec::Pie {
                values: (self.pie_values)(),
                labels: (self.pie_labels)(),
            },
            ChartKind::Map => ChartSpec::Map {
                latitude: (self.map_latitude)(),
                longitude: (self.map_longitude)(),
            },
        }
    }
}
