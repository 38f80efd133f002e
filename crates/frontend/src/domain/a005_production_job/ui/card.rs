use crate::shared::components::progress_gauge::ProgressGauge;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_number_with_decimals;
use contracts::domain::a005_production_job::ProductionJob;
use contracts::enums::{StatusCode, Tone};
use leptos::prelude::*;

const MILESTONE_PREVIEW: usize = 3;
const ITEM_PREVIEW: usize = 2;

#[component]
pub fn ProductionCard(job: ProductionJob) -> impl IntoView {
    let progress = f64::from(job.progress);
    let milestones_label = format!(
        "{}/{} milestones",
        job.completed_milestones(),
        job.milestones.len()
    );
    let schedule = match job.actual_completion {
        Some(actual) => format!(
            "Completed {}{}",
            format_date(actual),
            if job.is_on_time() { "" } else { " (late)" }
        ),
        None => format!("Due {}", format_date(job.estimated_completion)),
    };

    let milestones = job
        .milestones
        .iter()
        .take(MILESTONE_PREVIEW)
        .map(|m| {
            let class = format!(
                "milestone milestone--{}",
                m.status.tone().css_modifier()
            );
            view! {
                <li class=class>
                    <span class="milestone__name">{m.name.clone()}</span>
                    <span class="milestone__date">{format_date(m.date)}</span>
                </li>
            }
        })
        .collect_view();

    let items = job
        .items
        .iter()
        .take(ITEM_PREVIEW)
        .map(|item| {
            view! {
                <ProgressGauge
                    value=item.completion_percent()
                    tone=Tone::Informative
                    label=item.description.clone()
                    value_text=format!("{}/{}", item.completed, item.quantity)
                />
            }
        })
        .collect_view();

    let quality = job.quality_metrics.is_measured().then(|| {
        let metrics = job.quality_metrics;
        view! {
            <div class="record-card__quality">
                <span>{format!("Pass {}%", format_number_with_decimals(metrics.pass_rate, 1))}</span>
                <span>{format!("Defects {}%", format_number_with_decimals(metrics.defect_rate, 1))}</span>
                <span>{format!("Rework {}%", format_number_with_decimals(metrics.rework_rate, 1))}</span>
            </div>
        }
    });

    view! {
        <div class="record-card">
            <div class="record-card__header">
                <div>
                    <span class="record-card__code">{format!("{} · {}", job.id, job.po_id)}</span>
                    <h3 class="record-card__title">{job.title}</h3>
                    <p class="record-card__subtitle">{job.vendor}</p>
                </div>
                <div class="record-card__badges">
                    <StatusBadge status=job.status />
                    <StatusBadge status=job.priority />
                </div>
            </div>

            <ProgressGauge
                value=progress
                label="Progress".to_string()
                value_text=format!("{}%", job.progress)
            />

            <div class="record-card__meta">
                <span class="record-card__meta-item">{icon("target")}{milestones_label}</span>
                <span class="record-card__meta-item">{icon("calendar")}{schedule}</span>
            </div>

            <ul class="record-card__milestones">{milestones}</ul>

            <div class="record-card__items">{items}</div>

            {quality}
        </div>
    }
}
