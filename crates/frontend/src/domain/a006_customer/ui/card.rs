use crate::shared::components::progress_gauge::ProgressGauge;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::tag_list::TagList;
use crate::shared::data_context::use_config;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number_with_decimals};
use contracts::domain::a006_customer::Customer;
use contracts::enums::Tone;
use leptos::prelude::*;
use thaw::*;

/// Credit use above this share is shown as a warning
const CREDIT_WARNING_PERCENT: f64 = 80.0;

#[component]
pub fn CustomerCard(customer: Customer, #[prop(default = 3)] preview_limit: usize) -> impl IntoView {
    let symbol = use_config().ui.currency_symbol().to_string();
    let utilization = customer.credit_utilization_percent();
    let credit_tone = if utilization >= CREDIT_WARNING_PERCENT {
        Tone::Warning
    } else {
        Tone::Success
    };
    let credit_text = format!(
        "{} of {}",
        format_money(customer.total_spend, &symbol),
        format_money(customer.credit_limit, &symbol)
    );
    let rfqs = format!(
        "{} RFQs · {} active · {} completed",
        customer.total_rfqs, customer.active_rfqs, customer.completed_rfqs
    );

    view! {
        <div class="record-card">
            <div class="record-card__header">
                <div>
                    <h3 class="record-card__title">{customer.company_name}</h3>
                    <p class="record-card__subtitle">{format!("{} · {}", customer.contact_name, customer.industry)}</p>
                </div>
                <StatusBadge status=customer.status />
            </div>

            <div class="record-card__meta">
                <span class="record-card__meta-item">{icon("map-pin")}{customer.location}</span>
                <span class="record-card__meta-item">{icon("mail")}{customer.email}</span>
                <span class="record-card__meta-item">{icon("phone")}{customer.phone}</span>
            </div>

            <ProgressGauge
                value=utilization
                tone=credit_tone
                label="Credit utilization".to_string()
                value_text=credit_text
            />

            <TagList items=customer.preferred_categories limit=preview_limit color=BadgeColor::Brand />

            <dl class="record-card__facts">
                <dt>"Avg order"</dt>
                <dd>{format_money(customer.average_order_value, &symbol)}</dd>
                <dt>"Payment terms"</dt>
                <dd>{customer.payment_terms}</dd>
                <dt>"Customer for"</dt>
                <dd>{format!("{} months", customer.relationship_duration)}</dd>
                <dt>"Last order"</dt>
                <dd>{format_date(customer.last_order_date)}</dd>
            </dl>

            <div class="record-card__footer">
                <span>{rfqs}</span>
                <span class="record-card__rating">
                    {icon("star")}
                    {format_number_with_decimals(customer.satisfaction_score, 1)}
                </span>
            </div>
        </div>
    }
}
