//! Scrollable preview table for the loaded file.

use dioxus::prelude::*;
use excelviz_core::Table;

/// Rows rendered before the preview is truncated.
const PREVIEW_ROW_LIMIT: usize = 100;

#[derive(Props, Clone, PartialEq)]
pub struct DataPreviewProps {
    pub table: Table,
}

/// Renders the table headers plus the leading rows, with a note when the
/// preview is truncated.
#[component]
pub fn DataPreview(props: DataPreviewProps) -> Element {
    let total_rows = props.table.row_count();
    let shown = total_rows.min(PREVIEW_ROW_LIMIT);

    rsx! {
        div {
            style: "max-height: 360px; overflow: auto; margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 4px;",
            table {
                style: "border-collapse: collapse; width: 100%; font-size: 13px;",
                thead {
                    tr {
                        for column in props.table.columns().iter() {
                            th {
                                style: "position: sticky; top: 0; background: #f5f5f5; text-align: left; padding: 4px 8px; border-bottom: 1px solid #e0e0e0;",
                                "{column.name}"
                            }
                        }
                    }
                }
                tbody {
                    for row in 0..shown {
                        tr {
                            for column in props.table.columns().iter() {
                                td {
                                    style: "padding: 4px 8px; border-bottom: 1px solid #f0f0f0;",
                                    {column.data.display(row)}
                                }
                            }
                        }
                    }
                }
            }
        }
        if total_rows > PREVIEW_ROW_LIMIT {
            p {
                style: "font-size: 11px; color: #888; margin: 2px 0;",
                "Showing first {shown} of {total_rows} rows"
            }
        }
    }
}
