//! Horizontal proportional bar.

use contracts::enums::Tone;
use contracts::shared::scale::{css_percent, scale, PERCENT_CAPACITY};
use leptos::prelude::*;

#[component]
pub fn ProgressGauge(
    value: f64,
    /// Value that fills the bar; percentages use the default
    #[prop(default = PERCENT_CAPACITY)]
    capacity: f64,
    #[prop(default = Tone::Brand)] tone: Tone,
    /// Caption on the left; the right side shows the value text
    #[prop(optional, into)]
    label: Option<String>,
    #[prop(optional, into)] value_text: Option<String>,
) -> impl IntoView {
    let width = css_percent(scale(value, capacity));
    let fill_class = format!("gauge__fill gauge__fill--{}", tone.css_modifier());
    let has_caption = label.is_some() || value_text.is_some();

    view! {
        <div class="gauge">
            {has_caption.then(|| view! {
                <div class="gauge__caption">
                    <span class="gauge__label">{label.unwrap_or_default()}</span>
                    <span class="gauge__value">{value_text.unwrap_or_default()}</span>
                </div>
            })}
            <div class="gauge__track">
                <div class=fill_class style=format!("width: {};", width)></div>
            </div>
        </div>
    }
}
