//! Sidebar navigation: one entry per page, grouped.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Overview",
            items: vec![
                ("d400_overview", tab_label_for_key("d400_overview"), "layout-dashboard"),
                ("d401_analytics", tab_label_for_key("d401_analytics"), "bar-chart"),
            ],
        },
        MenuGroup {
            label: "Sourcing",
            items: vec![
                ("a001_vendor", tab_label_for_key("a001_vendor"), "building"),
                ("a002_rfq", tab_label_for_key("a002_rfq"), "file-text"),
                ("a003_purchase_order", tab_label_for_key("a003_purchase_order"), "shopping-cart"),
            ],
        },
        MenuGroup {
            label: "Operations",
            items: vec![
                ("a004_inventory_item", tab_label_for_key("a004_inventory_item"), "package"),
                ("a005_production_job", tab_label_for_key("a005_production_job"), "factory"),
                ("a006_customer", tab_label_for_key("a006_customer"), "users"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|(id, label, icon_name)| {
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || {
                                        ctx.active.get().as_deref() == Some(id)
                                    }
                                    on:click=move |_| ctx.open_tab(id, label)
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(icon_name)}
                                        <span>{label}</span>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_covers_every_page_once() {
        let ids: Vec<&str> = get_menu_groups()
            .iter()
            .flat_map(|g| g.items.iter().map(|(id, _, _)| *id))
            .collect();
        assert_eq!(ids.len(), 8);
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 8);
    }
}
