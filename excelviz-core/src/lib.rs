//! Core logic for ExcelViz: upload classification, tabular loading, chart
//! construction, and standalone HTML export.
//!
//! This crate is UI-free and WASM-agnostic. The flow it implements is a single
//! linear interaction cycle:
//!
//! 1. `intake` classifies an uploaded file by filename suffix
//! 2. `loader` parses the bytes into a typed [`table::Table`]
//! 3. `chart` builds Plotly figure payloads from a [`chart::ChartSpec`]
//! 4. `export` serializes the last figure to a downloadable HTML document
//!
//! `pipeline::run_cycle` ties the four stages together and is re-evaluated
//! from scratch by the UI on every interaction, so all state here is derived
//! and never mutated in place.

pub mod chart;
pub mod error;
pub mod export;
pub mod intake;
pub mod loader;
pub mod pipeline;
pub mod table;
mod xlsx;

pub use chart::{build_figures, ChartKind, ChartSpec, Figure};
pub use error::VizError;
pub use intake::{classify, FileFormat, UploadedFile};
pub use loader::load_table;
pub use pipeline::{run_cycle, CycleOutput, Request};
pub use table::{Column, ColumnData, Table};
