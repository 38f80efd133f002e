use crate::shared::components::progress_gauge::ProgressGauge;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use contracts::domain::a003_purchase_order::PurchaseOrder;
use contracts::enums::Tone;
use leptos::prelude::*;

/// Line items shown on a card
const LINE_PREVIEW: usize = 2;

/// Orders carry their own currency code; the common ones get a symbol.
fn order_currency_symbol(code: &str) -> String {
    match code {
        "USD" => "$".to_string(),
        "EUR" => "\u{20ac}".to_string(),
        "GBP" => "\u{a3}".to_string(),
        other => format!("{} ", other),
    }
}

#[component]
pub fn PurchaseOrderCard(order: PurchaseOrder) -> impl IntoView {
    let symbol = order_currency_symbol(&order.currency);
    let hidden_lines = order.items.len().saturating_sub(LINE_PREVIEW);
    let lines = order
        .items
        .iter()
        .take(LINE_PREVIEW)
        .map(|line| {
            view! {
                <li class="record-card__line">
                    <span>{format!("{} x {}", line.quantity, line.description)}</span>
                    <span>{format_money(line.total_price, &symbol)}</span>
                </li>
            }
        })
        .collect_view();
    let progress = f64::from(order.delivery_progress);
    let progress_tone = if order.delivery_progress >= 100 { Tone::Success } else { Tone::Brand };

    view! {
        <div class="record-card">
            <div class="record-card__header">
                <div>
                    <span class="record-card__code">{format!("{} · {}", order.id, order.rfq_id)}</span>
                    <h3 class="record-card__title">{order.title}</h3>
                    <p class="record-card__subtitle">{order.vendor_name}</p>
                </div>
                <div class="record-card__badges">
                    <StatusBadge status=order.status />
                    <StatusBadge status=order.priority />
                </div>
            </div>

            <div class="record-card__meta">
                <span class="record-card__meta-item">
                    {icon("calendar")}
                    {format!("Ordered {}", format_date(order.order_date))}
                </span>
                <span class="record-card__meta-item">
                    {icon("truck")}
                    {format!("Delivery {}", format_date(order.delivery_date))}
                </span>
            </div>

            <ProgressGauge
                value=progress
                tone=progress_tone
                label="Delivery progress".to_string()
                value_text=format!("{}%", order.delivery_progress)
            />

            <ul class="record-card__lines">
                {lines}
                {(hidden_lines > 0).then(|| view! {
                    <li class="record-card__line record-card__line--more">
                        {format!("+{} more items", hidden_lines)}
                    </li>
                })}
            </ul>

            <div class="record-card__footer">
                <span>{format!("Quality {}%", order.quality_score)}</span>
                <span class="record-card__amount">{format_money(order.total_amount, &symbol)}</span>
            </div>
        </div>
    }
}
