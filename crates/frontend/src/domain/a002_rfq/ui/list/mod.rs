use crate::domain::a002_rfq::ui::card::RfqCard;
use crate::layout::ModalService;
use crate::shared::components::empty_state::{EmptyState, LoadError};
use crate::shared::components::record_editor::RecordDraftEditor;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_filter::{status_options, StatusFilter};
use crate::shared::data_context::{use_config, use_data};
use crate::shared::icons::icon;
use crate::shared::list_utils::{use_record_filter, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use chrono::NaiveDate;
use contracts::domain::a002_rfq::{Rfq, RfqStatus};
use contracts::domain::common::AggregateRoot;
use contracts::enums::{Priority, Tone};
use contracts::shared::summary::Summarize;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

const FORM_KEY: &str = "a002_rfq";

fn blank_rfq() -> Rfq {
    Rfq {
        id: String::new(),
        title: String::new(),
        customer: String::new(),
        description: String::new(),
        status: RfqStatus::PendingAnalysis,
        priority: Priority::Medium,
        created_date: NaiveDate::default(),
        due_date: NaiveDate::default(),
        estimated_value: 0.0,
        attachments: Vec::new(),
        supplier_matches: 0,
        technical_requirements: Vec::new(),
        bom_items: Vec::new(),
    }
}

#[component]
pub fn RfqList() -> impl IntoView {
    let rfqs = match use_data().rfqs() {
        Ok(rfqs) => rfqs,
        Err(e) => {
            return view! {
                <LoadError page_id="a002_rfq--list" title=Rfq::list_name() message=e.to_string() />
            }
            .into_any()
        }
    };
    log!("RfqList: {} RFQs", rfqs.len());

    let modal = use_context::<ModalService>().expect("ModalService not provided in context");
    let preview_limit = use_config().ui.card_preview_limit;
    let (filter, filtered) = use_record_filter(rfqs);
    let summary = Rfq::summarize(rfqs);
    let count = move |status| summary.by_status.count(status).to_string();

    view! {
        <PageFrame page_id="a002_rfq--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Rfq::list_name()}</h1>
                    <p class="page__subtitle">"Manage request for quotes and supplier selections"</p>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.show(FORM_KEY)>
                        {icon("plus")}
                        "Create RFQ"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="list-toolbar">
                    <SearchInput value=filter.query placeholder="Search RFQs..." />
                    <StatusFilter
                        value=filter.category
                        all_label="All RFQs"
                        options={status_options::<RfqStatus>()}
                    />
                </div>

                <div class="stat-grid">
                    <StatCard label="Total RFQs" icon_name="file-text" value=summary.total.to_string() />
                    <StatCard
                        label="Pending"
                        icon_name="clock"
                        tone=Tone::Warning
                        value=count(RfqStatus::PendingAnalysis)
                    />
                    <StatCard
                        label="In Progress"
                        icon_name="target"
                        tone=Tone::Informative
                        value=count(RfqStatus::SupplierSelection)
                    />
                    <StatCard
                        label="Completed"
                        icon_name="check-circle"
                        tone=Tone::Success
                        value=count(RfqStatus::Completed)
                    />
                </div>

                <Show
                    when=move || filtered.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <EmptyState
                            message="No RFQs found. Try adjusting your search or filter criteria."
                            on_reset=Callback::new(move |_| filter.reset())
                        />
                    }
                >
                    <div class="card-grid">
                        <For each=move || filtered.get() key=|r| r.id.clone() let:rfq>
                            <RfqCard rfq=rfq preview_limit=preview_limit />
                        </For>
                    </div>
                </Show>
            </div>

            <RecordDraftEditor owner=FORM_KEY title=format!("Create {}", Rfq::element_name()) template=blank_rfq() />
        </PageFrame>
    }
    .into_any()
}
