//! Analytics page: KPI tiles, volume and on-time charts, category spend,
//! supplier scorecard.

use crate::shared::components::chart::{Chart, ChartKind};
use crate::shared::components::progress_gauge::ProgressGauge;
use crate::shared::components::stat_card::{format_value, StatTileCard};
use crate::shared::data_context::{use_config, use_data};
use crate::shared::number_format::{format_money, format_number_with_decimals};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d401_analytics::{AnalyticsReport, ReportPeriod, SupplierPerformance};
use contracts::dashboards::ValueFormat;
use contracts::enums::Tone;
use contracts::shared::scale::PERCENT_CAPACITY;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let period = RwSignal::new(ReportPeriod::default().code().to_string());

    Effect::new(move |_| {
        let code = period.get();
        match ReportPeriod::from_code(&code) {
            Some(p) => log!("AnalyticsPage: period {}", p.display_name()),
            None => log::warn!("AnalyticsPage: unknown period '{}'", code),
        }
    });

    let content = match use_data().analytics() {
        Ok(report) => view! { <AnalyticsContent report=report /> }.into_any(),
        Err(e) => view! { <div class="alert alert--error">{e.to_string()}</div> }.into_any(),
    };

    view! {
        <PageFrame page_id="d401_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Analytics"</h1>
                    <p class="page__subtitle">"Comprehensive insights into procurement performance and trends"</p>
                </div>
                <div class="page__header-right">
                    <Select value=period>
                        {ReportPeriod::all()
                            .iter()
                            .map(|p| view! { <option value=p.code()>{p.display_name()}</option> })
                            .collect_view()}
                    </Select>
                </div>
            </div>
            <div class="page__content">{content}</div>
        </PageFrame>
    }
}

#[component]
fn AnalyticsContent(report: &'static AnalyticsReport) -> impl IntoView {
    let symbol = use_config().ui.currency_symbol().to_string();

    let tiles = report
        .kpis
        .iter()
        .cloned()
        .map(|tile| view! { <StatTileCard tile=tile /> })
        .collect_view();

    let savings = format!(
        "{} saved",
        format_value(report.total_savings(), &ValueFormat::Money, &symbol)
    );

    let categories = report
        .category_shares()
        .into_iter()
        .map(|(category, share)| {
            view! {
                <div class="category-spend__row">
                    <ProgressGauge
                        value=share
                        label=category.name.clone()
                        value_text=format!("{}%", format_number_with_decimals(share, 1))
                    />
                    <span class="category-spend__amount">{format_money(category.value, &symbol)}</span>
                </div>
            }
        })
        .collect_view();

    let suppliers = report.top_suppliers.iter().map(supplier_row).collect_view();

    view! {
        <div class="stat-grid">{tiles}</div>

        <div class="dashboard-grid">
            <div class="panel">
                <div class="panel__header">
                    <h2 class="panel__title">"Procurement Volume & Savings"</h2>
                    <span class="panel__note">{savings}</span>
                </div>
                <Chart kind=ChartKind::Bar points=report.volume_series() format=ValueFormat::Money />
            </div>

            <div class="panel">
                <div class="panel__header">
                    <h2 class="panel__title">"Supplier Performance Trends"</h2>
                </div>
                <Chart
                    kind=ChartKind::Line
                    points=report.supplier_on_time.clone()
                    format=ValueFormat::Percent { decimals: 1 }
                    capacity=PERCENT_CAPACITY
                />
            </div>
        </div>

        <div class="panel">
            <div class="panel__header">
                <h2 class="panel__title">"Spending by Category"</h2>
            </div>
            <div class="category-spend">{categories}</div>
        </div>

        <div class="panel">
            <div class="panel__header">
                <h2 class="panel__title">"Top Performing Suppliers"</h2>
            </div>
            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Supplier"</th>
                            <th class="table__header-cell">"On-Time Delivery"</th>
                            <th class="table__header-cell">"Quality Score"</th>
                            <th class="table__header-cell">"Cost Performance"</th>
                            <th class="table__header-cell">"Total Orders"</th>
                        </tr>
                    </thead>
                    <tbody>{suppliers}</tbody>
                </table>
            </div>
        </div>
    }
}

fn score_cell(score: f64, tone: Tone) -> impl IntoView {
    view! {
        <td class="table__cell">
            <ProgressGauge value=score tone=tone value_text=format!("{}%", format_number_with_decimals(score, 1)) />
        </td>
    }
}

fn supplier_row(supplier: &SupplierPerformance) -> impl IntoView {
    view! {
        <tr class="table__row">
            <td class="table__cell">{supplier.name.clone()}</td>
            {score_cell(supplier.on_time, Tone::Success)}
            {score_cell(supplier.quality, Tone::Informative)}
            {score_cell(supplier.cost, Tone::Warning)}
            <td class="table__cell">{supplier.orders}</td>
        </tr>
    }
}
