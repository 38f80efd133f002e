use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::tag_list::TagList;
use crate::shared::data_context::use_config;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use contracts::domain::a002_rfq::Rfq;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RfqCard(rfq: Rfq, #[prop(default = 3)] preview_limit: usize) -> impl IntoView {
    let symbol = use_config().ui.currency_symbol().to_string();
    let lead_days = rfq.lead_days();
    let due = format!("Due {} ({} days)", format_date(rfq.due_date), lead_days);
    let attachments = rfq.attachments.len();
    let bom_lines = rfq.bom_items.len();

    view! {
        <div class="record-card">
            <div class="record-card__header">
                <div>
                    <span class="record-card__code">{rfq.id}</span>
                    <h3 class="record-card__title">{rfq.title}</h3>
                    <p class="record-card__subtitle">{rfq.customer}</p>
                </div>
                <div class="record-card__badges">
                    <StatusBadge status=rfq.status />
                    <StatusBadge status=rfq.priority />
                </div>
            </div>

            {(!rfq.description.is_empty()).then(|| view! {
                <p class="record-card__description">{rfq.description}</p>
            })}

            <div class="record-card__meta">
                <span class="record-card__meta-item">{icon("calendar")}{due}</span>
                <span class="record-card__meta-item">{icon("dollar-sign")}{format_money(rfq.estimated_value, &symbol)}</span>
            </div>

            <TagList items=rfq.technical_requirements limit=preview_limit color=BadgeColor::Informative />

            <div class="record-card__footer">
                <span class="record-card__meta-item">{icon("paperclip")}{format!("{} attachments", attachments)}</span>
                <span class="record-card__meta-item">{icon("building")}{format!("{} supplier matches", rfq.supplier_matches)}</span>
                <span class="record-card__meta-item">{icon("package")}{format!("{} BOM lines", bom_lines)}</span>
            </div>
        </div>
    }
}
