use crate::domain::a005_production_job::ui::card::ProductionCard;
use crate::layout::ModalService;
use crate::shared::components::empty_state::{EmptyState, LoadError};
use crate::shared::components::record_editor::RecordDraftEditor;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_filter::{status_options, StatusFilter};
use crate::shared::data_context::use_data;
use crate::shared::icons::icon;
use crate::shared::list_utils::{use_record_filter, SearchInput};
use crate::shared::number_format::format_number_with_decimals;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use chrono::NaiveDate;
use contracts::domain::a005_production_job::{ProductionJob, ProductionStatus, QualityMetrics};
use contracts::domain::common::AggregateRoot;
use contracts::enums::{Priority, Tone};
use contracts::shared::summary::Summarize;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

const FORM_KEY: &str = "a005_production_job";

fn blank_job() -> ProductionJob {
    ProductionJob {
        id: String::new(),
        po_id: String::new(),
        title: String::new(),
        description: String::new(),
        vendor: String::new(),
        status: ProductionStatus::Planning,
        priority: Priority::Medium,
        start_date: NaiveDate::default(),
        estimated_completion: NaiveDate::default(),
        actual_completion: None,
        progress: 0,
        milestones: Vec::new(),
        quality_metrics: QualityMetrics::default(),
        items: Vec::new(),
    }
}

#[component]
pub fn ProductionList() -> impl IntoView {
    let jobs = match use_data().production_jobs() {
        Ok(jobs) => jobs,
        Err(e) => {
            return view! {
                <LoadError
                    page_id="a005_production_job--list"
                    title=ProductionJob::list_name()
                    message=e.to_string()
                />
            }
            .into_any()
        }
    };
    log!("ProductionList: {} jobs", jobs.len());

    let modal = use_context::<ModalService>().expect("ModalService not provided in context");
    let (filter, filtered) = use_record_filter(jobs);
    let summary = ProductionJob::summarize(jobs);
    let count = move |status| summary.by_status.count(status).to_string();
    let average_progress = summary
        .average_progress
        .map(|p| format!("Average progress {}%", format_number_with_decimals(p, 0)));

    view! {
        <PageFrame page_id="a005_production_job--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{ProductionJob::list_name()}</h1>
                    <p class="page__subtitle">"Track production progress and monitor manufacturing milestones"</p>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.show(FORM_KEY)>
                        {icon("plus")}
                        "New Job"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="list-toolbar">
                    <SearchInput value=filter.query placeholder="Search production jobs..." />
                    <StatusFilter
                        value=filter.category
                        all_label="All Jobs"
                        options={status_options::<ProductionStatus>()}
                    />
                </div>

                <div class="stat-grid">
                    <StatCard
                        label="Total Jobs"
                        icon_name="factory"
                        value=summary.total.to_string()
                        subtitle=average_progress
                    />
                    <StatCard
                        label="In Progress"
                        icon_name="clock"
                        tone=Tone::Informative
                        value=count(ProductionStatus::InProgress)
                    />
                    <StatCard
                        label="Completed"
                        icon_name="check-circle"
                        tone=Tone::Success
                        value=count(ProductionStatus::Completed)
                    />
                    <StatCard
                        label="On-Time Rate"
                        icon_name="target"
                        tone=Tone::Warning
                        value=format!("{}%", summary.on_time_percent)
                    />
                </div>

                <Show
                    when=move || filtered.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <EmptyState
                            message="No production jobs found. Try adjusting your search or filter criteria."
                            on_reset=Callback::new(move |_| filter.reset())
                        />
                    }
                >
                    <div class="card-grid">
                        <For each=move || filtered.get() key=|j| j.id.clone() let:job>
                            <ProductionCard job=job />
                        </For>
                    </div>
                </Show>
            </div>

            <RecordDraftEditor owner=FORM_KEY title=format!("New {}", ProductionJob::element_name()) template=blank_job() />
        </PageFrame>
    }
    .into_any()
}
