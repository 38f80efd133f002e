use contracts::enums::{StatusCode, Tone};
use leptos::prelude::*;
use thaw::*;

/// Badge colour for a tone; exhaustive so a new tone cannot be left unstyled.
pub fn tone_color(tone: Tone) -> BadgeColor {
    match tone {
        Tone::Success => BadgeColor::Success,
        Tone::Warning => BadgeColor::Warning,
        Tone::Danger => BadgeColor::Danger,
        Tone::Informative => BadgeColor::Informative,
        Tone::Subtle => BadgeColor::Subtle,
        Tone::Brand => BadgeColor::Brand,
    }
}

/// Status or priority label coloured by its tone.
#[component]
pub fn StatusBadge<S>(status: S) -> impl IntoView
where
    S: StatusCode + Send + Sync,
{
    view! {
        <Badge appearance=BadgeAppearance::Tint color=tone_color(status.tone())>
            {status.display_name()}
        </Badge>
    }
}
