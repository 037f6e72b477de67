//! Page header with title and caption.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapHeaderProps {
    /// Page title
    pub title: String,
    /// Caption under the title (e.g., the years the data covers)
    #[props(default = String::new())]
    pub caption: String,
}

/// Header for the map page showing title and optional caption.
#[component]
pub fn MapHeader(props: MapHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 22px;",
                "{props.title}"
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #666;",
                    "{props.caption}"
                }
            }
        }
    }
}
