use crate::layout::tabs::TabStrip;
use leptos::prelude::*;

/// Content zone holding the tab strip and the tab pages.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <TabStrip />
            {children()}
        </div>
    }
}
