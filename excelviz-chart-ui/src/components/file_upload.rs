//! File upload widget restricted to the two recognized formats.

use crate::state::AppState;
use dioxus::prelude::*;
use excelviz_core::UploadedFile;

/// Single-file picker. Reads the bytes asynchronously and replaces the
/// current upload; a fresh upload also clears the column selection so the
/// next cycle starts from the new table.
#[component]
pub fn FileUpload() -> Element {
    let mut state = use_context::<AppState>();

    let on_change = move |evt: Event<FormData>| {
        if let Some(file_engine) = evt.files() {
            spawn(async move {
                // at most one file per interaction cycle
                let Some(name) = file_engine.files().first().cloned() else {
                    return;
                };
                if let Some(bytes) = file_engine.read_file(&name).await {
                    log::info!("upload: {} ({} bytes)", name, bytes.len());
                    state.selected_columns.set(Vec::new());
                    state.file.set(Some(UploadedFile::new(name, bytes)));
                }
            });
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold; margin-right: 8px;",
                "Choose a file "
            }
            input {
                r#type: "file",
                accept: ".xlsx,.csv",
                onchange: on_change,
            }
        }
    }
}
