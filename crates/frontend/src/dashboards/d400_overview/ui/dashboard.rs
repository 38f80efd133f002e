//! Landing page: KPI tiles, monthly volume, activity feed and open tasks.

use crate::shared::components::chart::{Chart, ChartKind};
use crate::shared::components::stat_card::StatTileCard;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::data_context::use_data;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_overview::{ActivityEntry, DashboardOverview, TaskEntry};
use contracts::dashboards::ValueFormat;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let content = match use_data().dashboard() {
        Ok(overview) => view! { <DashboardContent overview=overview /> }.into_any(),
        Err(e) => view! { <div class="alert alert--error">{e.to_string()}</div> }.into_any(),
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                    <p class="page__subtitle">"Overview of your procurement management system"</p>
                </div>
            </div>
            <div class="page__content">{content}</div>
        </PageFrame>
    }
}

#[component]
fn DashboardContent(overview: &'static DashboardOverview) -> impl IntoView {
    log!(
        "DashboardPage: {} tiles, {} activities, {} tasks",
        overview.stats.len(),
        overview.recent_activity.len(),
        overview.tasks.len()
    );

    let tiles = overview
        .stats
        .iter()
        .cloned()
        .map(|tile| view! { <StatTileCard tile=tile /> })
        .collect_view();

    // Volumes are stored in thousands
    let volume_format = ValueFormat::Number {
        decimals: 0,
        suffix: "K".to_string(),
    };

    let activity = overview
        .recent_activity
        .iter()
        .map(activity_row)
        .collect_view();

    let tasks = overview.open_tasks().map(task_row).collect_view();
    let open_count = overview.open_tasks().count();

    view! {
        <div class="stat-grid">{tiles}</div>

        <div class="dashboard-grid">
            <div class="panel">
                <div class="panel__header">
                    <h2 class="panel__title">"Monthly Procurement Volume"</h2>
                </div>
                <Chart
                    kind=ChartKind::Bar
                    points=overview.monthly_volume.clone()
                    format=volume_format
                />
            </div>

            <div class="panel">
                <div class="panel__header">
                    <h2 class="panel__title">"Recent Activity"</h2>
                </div>
                <ul class="activity-feed">{activity}</ul>
            </div>
        </div>

        <div class="panel">
            <div class="panel__header">
                <h2 class="panel__title">"Pending Tasks"</h2>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    {open_count.to_string()}
                </Badge>
            </div>
            <ul class="task-list">{tasks}</ul>
        </div>
    }
}

fn activity_row(entry: &ActivityEntry) -> impl IntoView {
    let class = format!(
        "activity-feed__icon activity-feed__icon--{}",
        entry.kind.tone().css_modifier()
    );
    view! {
        <li class="activity-feed__item">
            <span class=class>{icon(entry.kind.icon())}</span>
            <div class="activity-feed__body">
                <div class="activity-feed__title">{entry.title.clone()}</div>
                <div class="activity-feed__description">{entry.description.clone()}</div>
            </div>
            <span class="activity-feed__time">{entry.timestamp.clone()}</span>
        </li>
    }
}

fn task_row(task: &TaskEntry) -> impl IntoView {
    view! {
        <li class="task-list__item">
            <div class="task-list__body">
                <div class="task-list__title">{task.title.clone()}</div>
                <div class="task-list__description">{task.description.clone()}</div>
                <div class="task-list__meta">
                    {icon("user")}
                    <span>{task.assignee.clone()}</span>
                    {icon("calendar")}
                    <span>{format_date(task.due_date)}</span>
                </div>
            </div>
            <div class="task-list__badges">
                <StatusBadge status=task.priority />
                <StatusBadge status=task.status />
            </div>
        </li>
    }
}
