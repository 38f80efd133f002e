use crate::shared::components::progress_gauge::ProgressGauge;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::tag_list::TagList;
use crate::shared::data_context::use_config;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number_with_decimals};
use contracts::domain::a001_vendor::Vendor;
use contracts::enums::Tone;
use leptos::prelude::*;

#[component]
pub fn VendorCard(vendor: Vendor, #[prop(default = 3)] preview_limit: usize) -> impl IntoView {
    let symbol = use_config().ui.currency_symbol().to_string();
    let location = format!(
        "{} · {} mi",
        vendor.location,
        format_number_with_decimals(vendor.distance, 0)
    );
    let on_time = f64::from(vendor.on_time_delivery);
    let quality = f64::from(vendor.quality_score);

    view! {
        <div class="record-card">
            <div class="record-card__header">
                <div>
                    <h3 class="record-card__title">{vendor.company_name}</h3>
                    <p class="record-card__subtitle">{vendor.contact_name}</p>
                </div>
                <StatusBadge status=vendor.status />
            </div>

            <div class="record-card__meta">
                <span class="record-card__meta-item">{icon("map-pin")}{location}</span>
                <span class="record-card__meta-item">{icon("mail")}{vendor.email}</span>
                <span class="record-card__meta-item">{icon("phone")}{vendor.phone}</span>
            </div>

            <TagList items=vendor.capabilities limit=preview_limit />

            <div class="record-card__metrics">
                <span class="record-card__rating">
                    {icon("star")}
                    {format_number_with_decimals(vendor.rating, 1)}
                </span>
                <ProgressGauge
                    value=on_time
                    tone=Tone::Success
                    label="On-time delivery".to_string()
                    value_text=format!("{}%", vendor.on_time_delivery)
                />
                <ProgressGauge
                    value=quality
                    tone=Tone::Informative
                    label="Quality".to_string()
                    value_text=format!("{}%", vendor.quality_score)
                />
            </div>

            <div class="record-card__footer">
                <span>{format!("{} recent projects", vendor.recent_projects)}</span>
                <span class="record-card__amount">{format_money(vendor.total_spend, &symbol)}</span>
            </div>
        </div>
    }
}
