//! One full evaluation of the upload -> parse -> select -> chart -> export
//! flow.
//!
//! The UI rebuilds a [`Request`] from its widget signals on every interaction
//! and calls [`run_cycle`]; nothing is cached between cycles, so the derived
//! state is always consistent with the current raw inputs.

use crate::chart::{build_figures, ChartSpec, Figure};
use crate::export;
use crate::intake::UploadedFile;
use crate::loader::load_table;
use crate::table::Table;

/// Warning shown when the column multiselect is empty. Non-fatal: the data
/// preview stays visible and no chart logic runs.
pub const EMPTY_SELECTION_WARNING: &str =
    "Please select at least one column for visualization.";

/// The raw inputs of one interaction cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub file: Option<UploadedFile>,
    pub selected_columns: Vec<String>,
    pub chart: ChartSpec,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            file: None,
            selected_columns: Vec::new(),
            chart: ChartSpec::Line,
        }
    }
}

/// Everything one cycle derives. Replaced wholesale on the next interaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CycleOutput {
    /// The freshly parsed table, present whenever loading succeeded.
    pub table: Option<Table>,
    /// Figures built by the selected chart branch, in render order.
    pub figures: Vec<Figure>,
    /// Download href for the last figure built, if any.
    pub export_href: Option<String>,
    /// Non-fatal notice (empty column selection).
    pub warning: Option<String>,
    /// User-facing error message; set when the cycle halted.
    pub error: Option<String>,
}

/// Evaluate the whole pipeline top to bottom for one set of inputs.
///
/// No file is the idle state (nothing derived, nothing reported). Load
/// failures halt the cycle before any table exists; chart failures keep the
/// table and preview but produce no figures and no export link.
pub fn run_cycle(request: &Request) -> CycleOutput {
    let mut out = CycleOutput::default();

    let Some(file) = &request.file else {
        return out;
    };

    let table = match load_table(file) {
        Ok(table) => table,
        Err(e) => {
            log::warn!("cycle: load failed for {}: {e}", file.name);
            out.error = Some(e.user_message());
            return out;
        }
    };

    // The selection is re-validated against the freshly derived table so a
    // stale selection from a previous upload cannot leak through.
    let selected: Vec<String> = request
        .selected_columns
        .iter()
        .filter(|name| table.column(name).is_some())
        .cloned()
        .collect();

    if selected.is_empty() {
        out.warning = Some(EMPTY_SELECTION_WARNING.to_string());
        out.table = Some(table);
        return out;
    }

    match build_figures(&table, &selected, &request.chart) {
        Ok(figures) => {
            out.export_href = export_href_for(&figures);
            out.figures = figures;
        }
        Err(e) => {
            log::warn!("cycle: chart construction failed: {e}");
            out.error = Some(e.user_message());
        }
    }
    out.table = Some(table);
    out
}

/// The export link targets the last figure built in the cycle; no figure
/// means the Downloads section does not render at all.
fn export_href_for(figures: &[Figure]) -> Option<String> {
    figures
        .last()
        .map(|figure| export::download_href(&export::figure_to_html(figure)))
}
