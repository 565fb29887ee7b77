//! Reusable Dioxus RSX components for the ExcelViz app.

mod chart_container;
mod chart_kind_selector;
mod column_selector;
mod data_preview;
mod download_link;
mod error_display;
mod file_upload;
mod page_background;
mod role_selector;
mod warning_display;

pub use chart_container::ChartContainer;
pub use chart_kind_selector::ChartKindSelector;
pub use column_selector::ColumnSelector;
pub use data_preview::DataPreview;
pub use download_link::DownloadLink;
pub use error_display::ErrorDisplay;
pub use file_upload::FileUpload;
pub use page_background::PageBackground;
pub use role_selector::RoleSelector;
pub use warning_display::WarningDisplay;
