use leptos::prelude::*;
use thaw::*;

/// Placeholder for a list with nothing to show.
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    /// Adds a "Clear filters" button
    #[prop(optional)]
    on_reset: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state__message">{message}</p>
            {on_reset.map(|reset| view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset.run(())>
                    "Clear filters"
                </Button>
            })}
        </div>
    }
}

/// Page body shown when a collection failed to load.
#[component]
pub fn LoadError(
    page_id: &'static str,
    title: &'static str,
    #[prop(into)] message: String,
) -> impl IntoView {
    use crate::shared::page_frame::PageFrame;
    use crate::shared::page_standard::PAGE_CAT_LIST;

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
            </div>
            <div class="page__content">
                <div class="alert alert--error">{message}</div>
            </div>
        </PageFrame>
    }
}
