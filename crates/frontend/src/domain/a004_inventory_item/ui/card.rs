use crate::shared::components::progress_gauge::ProgressGauge;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::data_context::use_config;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number_int};
use contracts::domain::a004_inventory_item::InventoryItem;
use contracts::enums::StatusCode;
use leptos::prelude::*;

#[component]
pub fn InventoryCard(item: InventoryItem) -> impl IntoView {
    let config = use_config();
    let symbol = config.ui.currency_symbol().to_string();
    let level = item.stock_level_percent(config.inventory.gauge_capacity_factor);
    let tone = item.stock_status.tone();
    let reorder_hint = item.needs_reorder().then(|| {
        format!(
            "Reorder {} units (reorder point {})",
            format_number_int(f64::from(item.reorder_quantity)),
            format_number_int(f64::from(item.reorder_point))
        )
    });
    let consistent = item.has_consistent_stock();

    view! {
        <div class="record-card">
            <div class="record-card__header">
                <div>
                    <span class="record-card__code">{item.part_number}</span>
                    <h3 class="record-card__title">{item.description}</h3>
                    <p class="record-card__subtitle">{item.category}</p>
                </div>
                <StatusBadge status=item.stock_status />
            </div>

            <ProgressGauge
                value=level
                tone=tone
                label="Stock level".to_string()
                value_text=format!("{} on hand", format_number_int(f64::from(item.current_stock)))
            />

            <dl class="record-card__facts">
                <dt>"Available"</dt>
                <dd>{format_number_int(f64::from(item.available_stock))}</dd>
                <dt>"Reserved"</dt>
                <dd>{format_number_int(f64::from(item.reserved_stock))}</dd>
                <dt>"Unit cost"</dt>
                <dd>{format_money(item.unit_cost, &symbol)}</dd>
                <dt>"Total value"</dt>
                <dd>{format_money(item.total_value, &symbol)}</dd>
            </dl>

            {(!consistent).then(|| view! {
                <div class="record-card__alert">"Available stock does not match current minus reserved"</div>
            })}

            {reorder_hint.map(|hint| view! {
                <div class="record-card__alert">{icon("alert-triangle")}{hint}</div>
            })}

            <div class="record-card__footer">
                <span class="record-card__meta-item">{icon("map-pin")}{item.location}</span>
                <span class="record-card__meta-item">{icon("building")}{item.supplier}</span>
                <span class="record-card__meta-item">
                    {icon("calendar")}
                    {format!("Restocked {}", format_date(item.last_restocked))}
                </span>
            </div>
        </div>
    }
}
