use crate::domain::a003_purchase_order::ui::card::PurchaseOrderCard;
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
use contracts::domain::a003_purchase_order::{PurchaseOrder, PurchaseOrderStatus};
use contracts::domain::common::AggregateRoot;
use contracts::enums::{Priority, Tone};
use contracts::shared::summary::Summarize;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

const FORM_KEY: &str = "a003_purchase_order";

fn blank_order(currency: &str) -> PurchaseOrder {
    PurchaseOrder {
        id: String::new(),
        rfq_id: String::new(),
        vendor_name: String::new(),
        vendor_id: String::new(),
        title: String::new(),
        description: String::new(),
        status: PurchaseOrderStatus::Pending,
        priority: Priority::Medium,
        order_date: NaiveDate::default(),
        delivery_date: NaiveDate::default(),
        total_amount: 0.0,
        currency: currency.to_string(),
        items: Vec::new(),
        delivery_progress: 0,
        quality_score: 0,
    }
}

#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    let orders = match use_data().purchase_orders() {
        Ok(orders) => orders,
        Err(e) => {
            return view! {
                <LoadError
                    page_id="a003_purchase_order--list"
                    title=PurchaseOrder::list_name()
                    message=e.to_string()
                />
            }
            .into_any()
        }
    };
    log!("PurchaseOrderList: {} orders", orders.len());

    let modal = use_context::<ModalService>().expect("ModalService not provided in context");
    let config = use_config();
    let (filter, filtered) = use_record_filter(orders);
    let summary = PurchaseOrder::summarize(orders);
    let count = move |status| summary.by_status.count(status).to_string();
    let total_value = format_value(summary.total_amount, &ValueFormat::Money, config.ui.currency_symbol());

    view! {
        <PageFrame page_id="a003_purchase_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{PurchaseOrder::list_name()}</h1>
                    <p class="page__subtitle">"Track and manage purchase orders throughout their lifecycle"</p>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.show(FORM_KEY)>
                        {icon("plus")}
                        "Create PO"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="list-toolbar">
                    <SearchInput value=filter.query placeholder="Search purchase orders..." />
                    <StatusFilter
                        value=filter.category
                        all_label="All Orders"
                        options={status_options::<PurchaseOrderStatus>()}
                    />
                </div>

                <div class="stat-grid">
                    <StatCard label="Total Orders" icon_name="shopping-cart" value=summary.total.to_string() />
                    <StatCard
                        label="Pending"
                        icon_name="clock"
                        tone=Tone::Warning
                        value=count(PurchaseOrderStatus::Pending)
                    />
                    <StatCard
                        label="In Production"
                        icon_name="factory"
                        tone=Tone::Informative
                        value=count(PurchaseOrderStatus::InProduction)
                    />
                    <StatCard label="Total Value" icon_name="dollar-sign" tone=Tone::Success value=total_value />
                </div>

                <Show
                    when=move || filtered.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <EmptyState
                            message="No purchase orders found. Try adjusting your search or filter criteria."
                            on_reset=Callback::new(move |_| filter.reset())
                        />
                    }
                >
                    <div class="card-grid">
                        <For each=move || filtered.get() key=|o| o.id.clone() let:order>
                            <PurchaseOrderCard order=order />
                        </For>
                    </div>
                </Show>
            </div>

            <RecordDraftEditor
                owner=FORM_KEY
                title=format!("Create {}", PurchaseOrder::element_name())
                template=blank_order(&config.ui.currency)
            />
        </PageFrame>
    }
    .into_any()
}
