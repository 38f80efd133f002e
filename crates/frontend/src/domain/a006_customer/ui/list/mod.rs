use crate::domain::a006_customer::ui::card::CustomerCard;
use crate::layout::ModalService;
use crate::shared::components::empty_state::{EmptyState, LoadError};
use crate::shared::components::record_editor::RecordDraftEditor;
use crate::shared::components::stat_card::{format_value, StatCard};
use crate::shared::components::status_filter::{status_options, StatusFilter};
use crate::shared::data_context::{use_config, use_data};
use crate::shared::icons::icon;
use crate::shared::list_utils::{use_record_filter, SearchInput};
use crate::shared::number_format::format_number_with_decimals;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use chrono::NaiveDate;
use contracts::dashboards::ValueFormat;
use contracts::domain::a006_customer::{Customer, CustomerStatus};
use contracts::domain::common::AggregateRoot;
use contracts::enums::Tone;
use contracts::shared::summary::Summarize;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

const FORM_KEY: &str = "a006_customer";

fn blank_customer() -> Customer {
    Customer {
        id: String::new(),
        company_name: String::new(),
        contact_name: String::new(),
        email: String::new(),
        phone: String::new(),
        industry: String::new(),
        location: String::new(),
        status: CustomerStatus::Active,
        total_rfqs: 0,
        active_rfqs: 0,
        completed_rfqs: 0,
        total_spend: 0.0,
        average_order_value: 0.0,
        relationship_duration: 0,
        preferred_categories: Vec::new(),
        payment_terms: "Net 30".to_string(),
        credit_limit: 0.0,
        last_order_date: NaiveDate::default(),
        satisfaction_score: 0.0,
    }
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let customers = match use_data().customers() {
        Ok(customers) => customers,
        Err(e) => {
            return view! {
                <LoadError page_id="a006_customer--list" title=Customer::list_name() message=e.to_string() />
            }
            .into_any()
        }
    };
    log!("CustomerList: {} customers", customers.len());

    let modal = use_context::<ModalService>().expect("ModalService not provided in context");
    let config = use_config();
    let preview_limit = config.ui.card_preview_limit;
    let (filter, filtered) = use_record_filter(customers);
    let summary = Customer::summarize(customers);
    let revenue = format_value(summary.total_spend, &ValueFormat::Money, config.ui.currency_symbol());
    let satisfaction = summary
        .average_satisfaction
        .map(|s| format_number_with_decimals(s, 1))
        .unwrap_or_else(|| "-".to_string());

    view! {
        <PageFrame page_id="a006_customer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Customer::list_name()}</h1>
                    <p class="page__subtitle">"Manage customer relationships and track order history"</p>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.show(FORM_KEY)>
                        {icon("plus")}
                        "Add Customer"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="list-toolbar">
                    <SearchInput value=filter.query placeholder="Search customers..." />
                    <StatusFilter
                        value=filter.category
                        all_label="All Customers"
                        options={status_options::<CustomerStatus>()}
                    />
                </div>

                <div class="stat-grid">
                    <StatCard label="Total Customers" icon_name="users" value=summary.total.to_string() />
                    <StatCard
                        label="Active"
                        icon_name="check-circle"
                        tone=Tone::Success
                        value=summary.by_status.count(CustomerStatus::Active).to_string()
                    />
                    <StatCard label="Total Revenue" icon_name="dollar-sign" tone=Tone::Informative value=revenue />
                    <StatCard label="Avg Satisfaction" icon_name="star" tone=Tone::Warning value=satisfaction />
                </div>

                <Show
                    when=move || filtered.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <EmptyState
                            message="No customers found. Try adjusting your search or filter criteria."
                            on_reset=Callback::new(move |_| filter.reset())
                        />
                    }
                >
                    <div class="card-grid">
                        <For each=move || filtered.get() key=|c| c.id.clone() let:customer>
                            <CustomerCard customer=customer preview_limit=preview_limit />
                        </For>
                    </div>
                </Show>
            </div>

            <RecordDraftEditor owner=FORM_KEY title=format!("Add {}", Customer::element_name()) template=blank_customer() />
        </PageFrame>
    }
    .into_any()
}
