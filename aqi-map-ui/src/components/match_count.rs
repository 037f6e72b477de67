//! Read-only line with the number of readings matching the selection.

use crate::state::AppState;
use aqi_core::selection::selection_summary;
use dioxus::prelude::*;

#[component]
pub fn MatchCount() -> Element {
    let state = use_context::<AppState>();
    let Some(date) = (state.selected_date)() else {
        return rsx! {};
    };
    let summary = selection_summary((state.match_count)(), &date, (state.selected_hour)());

    rsx! {
        p {
            style: "margin: 8px 0; font-size: 14px;",
            "{summary}"
        }
    }
}
