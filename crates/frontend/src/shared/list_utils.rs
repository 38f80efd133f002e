//! List page helpers: debounced search box and the filtered-records memo.

use crate::shared::data_context::use_config;
use crate::shared::icons::icon;
use contracts::domain::common::{Categorized, Searchable};
use contracts::shared::filter::{filter_by_code, CATEGORY_ALL};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Query and status select of one list page.
#[derive(Clone, Copy)]
pub struct RecordFilterState {
    pub query: RwSignal<String>,
    pub category: RwSignal<String>,
}

impl RecordFilterState {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
            category: RwSignal::new(CATEGORY_ALL.to_string()),
        }
    }

    pub fn reset(&self) {
        self.query.set(String::new());
        self.category.set(CATEGORY_ALL.to_string());
    }
}

impl Default for RecordFilterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter state plus the records that pass it, recomputed on every change.
pub fn use_record_filter<R>(records: &'static [R]) -> (RecordFilterState, Memo<Vec<R>>)
where
    R: Searchable + Categorized + Clone + PartialEq + Send + Sync + 'static,
{
    let state = RecordFilterState::new();
    let filtered = Memo::new(move |_| {
        state
            .query
            .with(|query| state.category.with(|category| filter_by_code(records, query, category)))
    });
    (state, filtered)
}

/// Search box that writes into `value` after the configured debounce
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let delay_ms = use_config().ui.search_debounce_ms;

    // Typed text, ahead of the debounced `value`
    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        if delay_ms == 0 {
            value.set(new_value);
            return;
        }
        // Dropping the previous Timeout cancels it
        let timeout = Timeout::new(delay_ms, move || value.set(new_value));
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        value.set(String::new());
    };

    // External resets (e.g. "Clear filters") flow back into the box
    Effect::new(move |_| {
        let applied = value.get();
        if applied.is_empty() {
            set_input_value.set(applied);
        }
    });

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
