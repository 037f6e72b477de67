//! Date slider bounded by the first and last dates in the data.

use crate::state::AppState;
use aqi_core::timestamp::format_date;
use dioxus::prelude::*;

/// Slider over whole days between the dataset's date bounds.
///
/// Renders nothing until the bounds are known.
#[component]
pub fn DateSlider() -> Element {
    let mut state = use_context::<AppState>();
    let Some(bounds) = (state.date_bounds)() else {
        return rsx! {};
    };
    let selected = (state.selected_date)().unwrap_or_else(|| bounds.default_date());
    let span = bounds.span_days();
    let offset = bounds.offset_of(selected);
    let label = format_date(&selected);
    let min_label = format_date(&bounds.min);
    let max_label = format_date(&bounds.max);

    let on_input = move |evt: Event<FormData>| {
        if let Ok(offset) = evt.value().parse::<i64>() {
            state.select_date(bounds.date_at(offset));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "date-slider",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "📅 Date: {label}"
            }
            input {
                id: "date-slider",
                r#type: "range",
                min: "0",
                max: "{span}",
                step: "1",
                value: "{offset}",
                style: "width: 100%;",
                oninput: on_input,
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #888;",
                span { "{min_label}" }
                span { "{max_label}" }
            }
        }
    }
}
