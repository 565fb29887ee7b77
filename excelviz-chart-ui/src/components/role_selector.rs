//! Generic single-choice dropdown binding a column to a chart role.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RoleSelectorProps {
    /// Prompt shown next to the dropdown (e.g. "Select X-Axis Column")
    pub label: String,
    /// Column names offered for this role
    pub options: Vec<String>,
    /// Signal the chosen column name is written into
    pub binding: Signal<String>,
}

/// Role dropdown. The set of offered columns differs per chart kind: Bar and
/// Pie bind from the selected columns, Map from the full table column set.
#[component]
pub fn RoleSelector(props: RoleSelectorProps) -> Element {
    let mut binding = props.binding;
    let current = binding();

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold; margin-right: 8px;",
                "{props.label} "
                select {
                    onchange: move |evt: Event<FormData>| binding.set(evt.value()),
                    for name in props.options.iter() {
                        option {
                            value: "{name}",
                            selected: *name == current,
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}
