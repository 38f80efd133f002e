use crate::domain::a001_vendor::ui::card::VendorCard;
use crate::layout::ModalService;
use crate::shared::components::empty_state::{EmptyState, LoadError};
use crate::shared::components::record_editor::RecordDraftEditor;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_filter::{status_options, StatusFilter};
use crate::shared::data_context::{use_config, use_data};
use crate::shared::icons::icon;
use crate::shared::list_utils::{use_record_filter, SearchInput};
use crate::shared::number_format::format_number_with_decimals;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_vendor::{Vendor, VendorStatus};
use contracts::domain::common::AggregateRoot;
use contracts::enums::Tone;
use contracts::shared::summary::Summarize;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

const FORM_KEY: &str = "a001_vendor";

/// Empty record the "Add Vendor" draft starts from.
fn blank_vendor() -> Vendor {
    Vendor {
        id: String::new(),
        company_name: String::new(),
        contact_name: String::new(),
        email: String::new(),
        phone: String::new(),
        location: String::new(),
        distance: 0.0,
        rating: 0.0,
        capabilities: Vec::new(),
        industries: Vec::new(),
        certifications: Vec::new(),
        recent_projects: 0,
        on_time_delivery: 0,
        quality_score: 0,
        total_spend: 0.0,
        status: VendorStatus::Pending,
    }
}

fn average_text(value: Option<f64>, decimals: u8, suffix: &str) -> String {
    match value {
        Some(v) => format!("{}{}", format_number_with_decimals(v, decimals), suffix),
        None => "-".to_string(),
    }
}

#[component]
pub fn VendorList() -> impl IntoView {
    let vendors = match use_data().vendors() {
        Ok(vendors) => vendors,
        Err(e) => {
            return view! {
                <LoadError page_id="a001_vendor--list" title=Vendor::list_name() message=e.to_string() />
            }
            .into_any()
        }
    };
    log!("VendorList: {} vendors", vendors.len());

    let modal = use_context::<ModalService>().expect("ModalService not provided in context");
    let preview_limit = use_config().ui.card_preview_limit;
    let (filter, filtered) = use_record_filter(vendors);
    let summary = Vendor::summarize(vendors);

    view! {
        <PageFrame page_id="a001_vendor--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Vendor::list_name()}</h1>
                    <p class="page__subtitle">"Manage your supplier network and vendor relationships"</p>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.show(FORM_KEY)>
                        {icon("plus")}
                        "Add Vendor"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="list-toolbar">
                    <SearchInput value=filter.query placeholder="Search vendors..." />
                    <StatusFilter
                        value=filter.category
                        all_label="All Vendors"
                        options={status_options::<VendorStatus>()}
                    />
                </div>

                <div class="stat-grid">
                    <StatCard label="Total Vendors" icon_name="building" value=summary.total.to_string() />
                    <StatCard
                        label="Avg Rating"
                        icon_name="star"
                        tone=Tone::Warning
                        value=average_text(summary.average_rating, 1, "")
                    />
                    <StatCard
                        label="On-Time Delivery"
                        icon_name="trending-up"
                        tone=Tone::Success
                        value=average_text(summary.average_on_time_delivery, 0, "%")
                    />
                    <StatCard
                        label="Avg Distance"
                        icon_name="map-pin"
                        tone=Tone::Informative
                        value=average_text(summary.average_distance, 0, " mi")
                    />
                </div>

                <Show
                    when=move || filtered.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <EmptyState
                            message="No vendors found. Try adjusting your search or filter criteria."
                            on_reset=Callback::new(move |_| filter.reset())
                        />
                    }
                >
                    <div class="card-grid">
                        <For each=move || filtered.get() key=|v| v.id.clone() let:vendor>
                            <VendorCard vendor=vendor preview_limit=preview_limit />
                        </For>
                    </div>
                </Show>
            </div>

            <RecordDraftEditor owner=FORM_KEY title=format!("Add {}", Vendor::element_name()) template=blank_vendor() />
        </PageFrame>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_text() {
        assert_eq!(average_text(Some(4.6333), 1, ""), "4.6");
        assert_eq!(average_text(Some(92.0), 0, "%"), "92%");
        assert_eq!(average_text(None, 0, " mi"), "-");
    }

    #[test]
    fn test_blank_vendor_round_trips_through_draft() {
        let json = serde_json::to_string(&blank_vendor()).unwrap();
        let parsed: Vendor = contracts::shared::save::parse_draft(&json).unwrap();
        assert_eq!(parsed, blank_vendor());
    }
}
