use contracts::enums::StatusCode;
use contracts::shared::filter::CATEGORY_ALL;
use leptos::prelude::*;
use thaw::*;

/// `(code, label)` for every status of `S`, in declaration order.
pub fn status_options<S: StatusCode>() -> Vec<(&'static str, &'static str)> {
    S::all().iter().map(|s| (s.code(), s.display_name())).collect()
}

/// Status select with an "all" wildcard first.
#[component]
pub fn StatusFilter(
    value: RwSignal<String>,
    /// Caption of the wildcard option, e.g. "All Vendors"
    all_label: &'static str,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <Select value=value>
            <option value=CATEGORY_ALL>{all_label}</option>
            {options
                .into_iter()
                .map(|(code, label)| view! { <option value=code>{label}</option> })
                .collect_view()}
        </Select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_inventory_item::StockStatus;

    #[test]
    fn test_status_options_follow_declaration_order() {
        assert_eq!(
            status_options::<StockStatus>(),
            vec![
                ("critical", "Critical"),
                ("low", "Low Stock"),
                ("adequate", "Adequate"),
                ("high", "High Stock"),
            ]
        );
    }
}
