use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::ModalService;
use crate::shared::data_context::DataContext;
use crate::system::auth::context::AuthProvider;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // One editor dialog at a time, owned by the page that opened it
    provide_context(ModalService::new());

    // Sample collections and UI settings, read-only for the app lifetime
    provide_context(DataContext::sample());
    provide_context(AppConfig::embedded());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
