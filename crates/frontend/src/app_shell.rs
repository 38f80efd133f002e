//! Application shell: the auth gate and the main layout behind it.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::{tab_label_for_key, TabPage};
use crate::layout::Shell;
use crate::layout::left::sidebar::Sidebar;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::logging::log;
use leptos::prelude::*;

/// Tab opened when the layout first appears
pub const HOME_TAB: &str = "d400_overview";

/// Sidebar plus one tab page per opened tab.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Restores ?active=... and keeps the URL in sync from now on
    tabs_store.init_router_integration();
    if tabs_store.active.get_untracked().is_none() {
        tabs_store.open_tab(HOME_TAB, tab_label_for_key(HOME_TAB));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            log!("Rendering tab '{}'", tab.key);
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }.into_any()
            }
        />
    }
}

/// Shows `LoginPage` until a user signs in, then the main layout.
#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireAuth fallback=|| view! { <LoginPage /> }>
            <MainLayout />
        </RequireAuth>
    }
}
