//! Download link for the exported standalone chart document.

use dioxus::prelude::*;
use excelviz_core::export::{EXPORT_FILE_NAME, EXPORT_LINK_LABEL};

#[derive(Props, Clone, PartialEq)]
pub struct DownloadLinkProps {
    /// Base64 `data:` href of the serialized document.
    pub href: String,
}

/// Clickable "Download Plot" link saving the figure as `plot.html`.
#[component]
pub fn DownloadLink(props: DownloadLinkProps) -> Element {
    rsx! {
        a {
            href: "{props.href}",
            download: EXPORT_FILE_NAME,
            style: "display: inline-block; margin: 4px 0; color: #1565C0; font-weight: bold;",
            {EXPORT_LINK_LABEL}
        }
    }
}
