//! Bar and line charts drawn with plain DOM and SVG.

use crate::shared::components::stat_card::format_value;
use crate::shared::data_context::use_config;
use contracts::dashboards::{ChartPoint, ValueFormat};
use contracts::shared::scale::{css_percent, scale, series_max};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

/// SVG polyline points in a 100x100 viewBox, spread evenly left to right.
pub fn line_points(values: &[f64], capacity: f64) -> String {
    let last = values.len().saturating_sub(1);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if last == 0 {
                50.0
            } else {
                i as f64 * 100.0 / last as f64
            };
            let y = 100.0 - scale(*v, capacity);
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn Chart(
    kind: ChartKind,
    points: Vec<ChartPoint>,
    #[prop(default = ValueFormat::Integer)] format: ValueFormat,
    /// Value of a full-height bar; the series maximum when omitted
    #[prop(optional, into)]
    capacity: Option<f64>,
) -> impl IntoView {
    let symbol = use_config().ui.currency_symbol().to_string();
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let capacity = capacity.unwrap_or_else(|| series_max(&values));

    let labels = points
        .iter()
        .map(|p| view! { <span class="chart__label">{p.name.clone()}</span> })
        .collect_view();

    let plot = match kind {
        ChartKind::Bar => {
            let bars = points
                .iter()
                .map(|p| {
                    let height = css_percent(scale(p.value, capacity));
                    let title = format!("{}: {}", p.name, format_value(p.value, &format, &symbol));
                    view! {
                        <div class="chart__column">
                            <div class="chart__bar" style=format!("height: {};", height) title=title></div>
                        </div>
                    }
                })
                .collect_view();
            view! { <div class="chart__plot chart__plot--bar">{bars}</div> }.into_any()
        }
        ChartKind::Line => {
            let polyline = line_points(&values, capacity);
            view! {
                <div class="chart__plot chart__plot--line">
                    <svg viewBox="0 0 100 100" preserveAspectRatio="none" class="chart__svg">
                        <polyline
                            points=polyline
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            vector-effect="non-scaling-stroke"
                        />
                    </svg>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="chart">
            {plot}
            <div class="chart__labels">{labels}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::line_points;

    #[test]
    fn test_line_points() {
        assert_eq!(line_points(&[50.0, 100.0], 100.0), "0.0,50.0 100.0,0.0");
        assert_eq!(
            line_points(&[0.0, 50.0, 100.0], 100.0),
            "0.0,100.0 50.0,50.0 100.0,0.0"
        );
    }

    #[test]
    fn test_single_point_is_centered() {
        assert_eq!(line_points(&[30.0], 60.0), "50.0,50.0");
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(line_points(&[], 100.0), "");
    }
}
