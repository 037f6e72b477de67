//! Hour-of-day slider, 0 through 23.

use crate::state::AppState;
use aqi_core::selection::HourOfDay;
use dioxus::prelude::*;

#[component]
pub fn HourSlider() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.selected_hour)();
    let min_hour = HourOfDay::MIN;
    let max_hour = HourOfDay::MAX;

    let on_input = move |evt: Event<FormData>| {
        if let Ok(hour) = evt.value().parse::<HourOfDay>() {
            state.select_hour(hour);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "hour-slider",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "🕒 Hour: {current}:00"
            }
            input {
                id: "hour-slider",
                r#type: "range",
                min: "{min_hour}",
                max: "{max_hour}",
                step: "1",
                value: "{current}",
                style: "width: 100%;",
                oninput: on_input,
            }
        }
    }
}
