//! Column multiselect gating all chart logic.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ColumnSelectorProps {
    /// All column names of the current table, in table order.
    pub options: Vec<String>,
}

/// Checkbox multiselect over the table's columns. Zero picks is a valid idle
/// state handled upstream with a warning.
#[component]
pub fn ColumnSelector(props: ColumnSelectorProps) -> Element {
    let state = use_context::<AppState>();
    let selected = state.selected_columns.read().clone();

    rsx! {
        div {
            style: "margin: 8px 0;",
            p {
                style: "font-weight: bold; margin: 0 0 4px 0;",
                "Select columns for visualization"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px;",
                for name in props.options.clone() {
                    label {
                        key: "{name}",
                        style: "display: flex; align-items: center; gap: 4px;",
                        input {
                            r#type: "checkbox",
                            checked: selected.contains(&name),
                            onchange: {
                                let name = name.clone();
                                move |_| toggle_column(state, &name)
                            },
                        }
                        "{name}"
                    }
                }
            }
        }
    }
}

fn toggle_column(mut state: AppState, name: &str) {
    let mut current = state.selected_columns.write();
    if let Some(position) = current.iter().position(|c| c == name) {
        current.remove(position);
    } else {
        current.push(name.to_string());
    }
}
