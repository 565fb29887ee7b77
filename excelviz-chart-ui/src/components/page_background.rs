//! Decorative page background layered behind the content area.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageBackgroundProps {
    /// Raw SVG markup, embedded by the app at compile time.
    pub image: String,
}

/// Fixed full-viewport background image, rendered behind the content layer
/// at reduced opacity. Pure presentation; no logic.
#[component]
pub fn PageBackground(props: PageBackgroundProps) -> Element {
    let data_uri = format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(props.image.as_bytes())
    );

    rsx! {
        div {
            style: "background-image: url('{data_uri}'); background-size: cover; position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: -1; opacity: 0.7;",
        }
    }
}
