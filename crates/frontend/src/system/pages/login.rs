use leptos::prelude::*;

use crate::system::auth::context::{do_login, use_auth};
use contracts::shared::config::AppConfig;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let (name, set_name) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Updating the auth state switches the gate to the main layout
        match do_login(&name.get(), set_auth_state) {
            Ok(()) => set_error_message.set(None),
            Err(e) => set_error_message.set(Some(e)),
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{config.ui.title}</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            placeholder="Jane Smith"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        "Sign in"
                    </button>
                </form>

                <div class="login-info">
                    <p>"Demo workspace: any name signs you in."</p>
                </div>
            </div>
        </div>
    }
}
