use crate::domain::a004_inventory_item::ui::card::InventoryCard;
use crate::layout::ModalService;
use crate::shared::components::empty_state::{EmptyState, LoadError};
use crate::shared::components::record_editor::RecordDraftEditor;
use crate::shared::components::stat_card::{format_value, StatCard};
use crate::shared::components::status_filter::{status_options, StatusFilter};
use crate::shared::data_context::{use_config, use_data};
use crate::shared::icons::icon;
use crate::shared::list_utils::{use_record_filter, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use chrono::NaiveDate;
use contracts::dashboards::ValueFormat;
use contracts::domain::a004_inventory_item::{InventoryItem, StockStatus};
use contracts::domain::common::AggregateRoot;
use contracts::enums::Tone;
use contracts::shared::summary::Summarize;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

const FORM_KEY: &str = "a004_inventory_item";

fn blank_item() -> InventoryItem {
    InventoryItem {
        id: String::new(),
        part_number: String::new(),
        description: String::new(),
        category: String::new(),
        current_stock: 0,
        reserved_stock: 0,
        available_stock: 0,
        reorder_point: 0,
        reorder_quantity: 0,
        unit_cost: 0.0,
        total_value: 0.0,
        location: String::new(),
        supplier: String::new(),
        last_restocked: NaiveDate::default(),
        stock_status: StockStatus::Adequate,
    }
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let items = match use_data().inventory_items() {
        Ok(items) => items,
        Err(e) => {
            return view! {
                <LoadError
                    page_id="a004_inventory_item--list"
                    title=InventoryItem::list_name()
                    message=e.to_string()
                />
            }
            .into_any()
        }
    };
    log!("InventoryList: {} items", items.len());

    let modal = use_context::<ModalService>().expect("ModalService not provided in context");
    let config = use_config();
    let (filter, filtered) = use_record_filter(items);
    let summary = InventoryItem::summarize(items);
    let count = move |status| summary.by_status.count(status).to_string();
    let total_value = format_value(summary.total_value, &ValueFormat::Money, config.ui.currency_symbol());
    let reorder_note = format!("{} items need reordering", summary.needs_reorder);

    view! {
        <PageFrame page_id="a004_inventory_item--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{InventoryItem::list_name()}</h1>
                    <p class="page__subtitle">"Monitor stock levels and manage inventory across all locations"</p>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.show(FORM_KEY)>
                        {icon("plus")}
                        "Add Item"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="list-toolbar">
                    <SearchInput value=filter.query placeholder="Search inventory..." />
                    <StatusFilter
                        value=filter.category
                        all_label="All Items"
                        options={status_options::<StockStatus>()}
                    />
                </div>

                <div class="stat-grid">
                    <StatCard label="Total Items" icon_name="package" value=summary.total.to_string() />
                    <StatCard
                        label="Critical"
                        icon_name="alert-triangle"
                        tone=Tone::Danger
                        value=count(StockStatus::Critical)
                        subtitle=reorder_note
                    />
                    <StatCard
                        label="Low Stock"
                        icon_name="trending-down"
                        tone=Tone::Warning
                        value=count(StockStatus::Low)
                    />
                    <StatCard
                        label="Adequate"
                        icon_name="check-circle"
                        tone=Tone::Success
                        value=count(StockStatus::Adequate)
                    />
                    <StatCard label="Total Value" icon_name="dollar-sign" tone=Tone::Informative value=total_value />
                </div>

                <Show
                    when=move || filtered.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <EmptyState
                            message="No inventory items found. Try adjusting your search or filter criteria."
                            on_reset=Callback::new(move |_| filter.reset())
                        />
                    }
                >
                    <div class="card-grid">
                        <For each=move || filtered.get() key=|i| i.id.clone() let:item>
                            <InventoryCard item=item />
                        </For>
                    </div>
                </Show>
            </div>

            <RecordDraftEditor owner=FORM_KEY title=format!("Add {}", InventoryItem::element_name()) template=blank_item() />
        </PageFrame>
    }
    .into_any()
}
