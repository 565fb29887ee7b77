//! Dropdown selector for the chart kind.

use crate::state::AppState;
use dioxus::prelude::*;
use excelviz_core::ChartKind;

/// Single-choice dropdown over the four chart kinds, Line first.
#[component]
pub fn ChartKindSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.chart_kind)();

    let on_change = move |evt: Event<FormData>| {
        if let Some(kind) = ChartKind::from_label(&evt.value()) {
            state.chart_kind.set(kind);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Select a chart type: "
                select {
                    onchange: on_change,
                    for kind in ChartKind::ALL {
                        option {
                            value: kind.label(),
                            selected: kind == current,
                            {kind.label()}
                        }
                    }
                }
            }
        }
    }
}
