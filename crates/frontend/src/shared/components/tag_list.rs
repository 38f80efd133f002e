use leptos::prelude::*;
use thaw::*;

/// First `limit` tags and how many were left out.
pub fn preview<T>(items: &[T], limit: usize) -> (&[T], usize) {
    let shown = items.len().min(limit);
    (&items[..shown], items.len() - shown)
}

/// Short tag row with a "+N more" counter.
#[component]
pub fn TagList(
    items: Vec<String>,
    #[prop(default = 3)] limit: usize,
    #[prop(default = BadgeColor::Subtle)] color: BadgeColor,
) -> impl IntoView {
    let (shown, hidden) = preview(&items, limit);
    let badges = shown
        .iter()
        .map(|tag| {
            let color = color.clone();
            let tag = tag.clone();
            view! {
                <Badge appearance=BadgeAppearance::Tint color=color>{tag.clone()}</Badge>
            }
        })
        .collect_view();

    view! {
        <div class="tag-list">
            {badges}
            {(hidden > 0).then(|| view! {
                <span class="tag-list__more">{format!("+{} more", hidden)}</span>
            })}
        </div>
    }
}
