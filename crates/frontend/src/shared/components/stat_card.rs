use crate::shared::data_context::use_config;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_compact_money, format_number_int, format_number_with_decimals};
use contracts::dashboards::{StatTile, ValueFormat};
use contracts::enums::{Tone, Trend};
use leptos::prelude::*;

/// Render a tile value in the given format.
pub fn format_value(val: f64, fmt: &ValueFormat, currency_symbol: &str) -> String {
    match fmt {
        ValueFormat::Money => format_compact_money(val, currency_symbol),
        ValueFormat::Integer => format_number_int(val),
        ValueFormat::Percent { decimals } => {
            format!("{}%", format_number_with_decimals(val, *decimals))
        }
        ValueFormat::Number { decimals, suffix } => {
            format!("{}{}", format_number_with_decimals(val, *decimals), suffix)
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: String,
    #[prop(default = Tone::Brand)] tone: Tone,
    /// Change label and its direction, e.g. `("+12%", Trend::Up)`
    #[prop(optional_no_strip)]
    change: Option<(String, Trend)>,
    /// Optional subtitle below the value
    #[prop(optional_no_strip, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    let class = format!("stat-card stat-card--{}", tone.css_modifier());

    let change_view = change.map(|(text, trend)| {
        let cls = format!("stat-card__change stat-card__change--{}", trend.tone().css_modifier());
        view! { <span class=cls>{trend.arrow()}{text}</span> }
    });

    let subtitle_view = subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> });

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {value}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}

/// KPI tile coming from a dashboard document.
#[component]
pub fn StatTileCard(tile: StatTile) -> impl IntoView {
    let symbol = use_config().ui.currency_symbol().to_string();
    let value = format_value(tile.value, &tile.format, &symbol);
    let change = Some((tile.change_label(), tile.trend));
    let icon_name = tile_icon(&tile.icon);

    view! {
        <StatCard
            label=tile.title
            icon_name=icon_name
            value=value
            tone=tile.tone
            change=change
            subtitle=tile.description
        />
    }
}

/// Icon names are free text in the documents; map them onto known icons.
fn tile_icon(name: &str) -> &'static str {
    match name {
        "file-text" => "file-text",
        "shopping-cart" => "shopping-cart",
        "dollar-sign" => "dollar-sign",
        "trending-up" => "trending-up",
        "trending-down" => "trending-down",
        "clock" => "clock",
        "star" => "star",
        "target" => "target",
        "users" => "users",
        "package" => "package",
        "factory" => "factory",
        "building" => "building",
        "check-circle" => "check-circle",
        "bar-chart" => "bar-chart",
        _ => "layout-dashboard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(284_000.0, &ValueFormat::Money, "$"), "$284K");
        assert_eq!(format_value(1_200_000.0, &ValueFormat::Money, "$"), "$1.2M");
        assert_eq!(format_value(2847.0, &ValueFormat::Integer, "$"), "2,847");
        assert_eq!(
            format_value(94.2, &ValueFormat::Percent { decimals: 1 }, "$"),
            "94.2%"
        );
        assert_eq!(
            format_value(
                4.2,
                &ValueFormat::Number { decimals: 1, suffix: " days".to_string() },
                "$"
            ),
            "4.2 days"
        );
    }

    #[test]
    fn test_unknown_tile_icon_falls_back() {
        assert_eq!(tile_icon("star"), "star");
        assert_eq!(tile_icon("rocket"), "layout-dashboard");
    }
}
