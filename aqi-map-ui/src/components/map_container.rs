//! Map container component with loading state.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id for the map container (Leaflet will render into this)
    pub id: String,
    /// Whether a redraw is pending
    #[props(default = false)]
    pub loading: bool,
    /// Map height in pixels
    #[props(default = 600)]
    pub height: u32,
}

/// A full-width container div for the Leaflet map with a pending-redraw overlay.
///
/// Leaflet needs an explicit height on its container, so unlike a chart the
/// inner div is sized here rather than by its content.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%;",
        props.height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%; border-radius: 4px;",
            }
            if props.loading {
                div {
                    style: "position: absolute; top: 8px; right: 8px; z-index: 1000; padding: 2px 8px; background: rgba(0,0,0,0.6); color: #eee; border-radius: 4px; font-size: 12px;",
                    "Updating map..."
                }
            }
        }
    }
}
