//! Legend of AQI category colors.

use aqi_core::category::AqiCategory;
use dioxus::prelude::*;

#[component]
pub fn CategoryLegend() -> Element {
    let entries: Vec<(&'static str, &'static str)> = AqiCategory::ALL
        .iter()
        .map(|c| (c.label(), c.color()))
        .collect();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 10px; margin: 8px 0; font-size: 12px;",
            for (label, color) in entries {
                span {
                    key: "{label}",
                    style: "display: inline-flex; align-items: center; gap: 4px;",
                    span {
                        style: "display: inline-block; width: 12px; height: 12px; border-radius: 50%; background: {color};",
                    }
                    "{label}"
                }
            }
        }
    }
}
