//! Shared Dioxus components and Plotly bridge for the ExcelViz app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for plotly.js calls via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (upload widget, selectors,
//!   preview table, error/warning boxes, download link)

pub mod components;
pub mod js_bridge;
pub mod state;
