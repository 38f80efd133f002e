use leptos::prelude::*;

use super::storage;

/// Role shown for every demo session
pub const DEMO_ROLE: &str = "Procurement Manager";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub name: String,
    pub role: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Accepts any name that is not blank.
pub fn sign_in(name: &str) -> Result<SessionUser, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name to sign in".to_string());
    }
    Ok(SessionUser {
        name: name.to_string(),
        role: DEMO_ROLE.to_string(),
    })
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore a remembered session
    let restored = storage::get_session_name()
        .and_then(|name| sign_in(&name).ok())
        .map(|user| {
            log::info!("Restored session for {}", user.name);
            user
        });
    let (auth_state, set_auth_state) = signal(AuthState { user: restored });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
pub fn do_login(name: &str, set_auth_state: WriteSignal<AuthState>) -> Result<(), String> {
    let user = sign_in(name)?;
    storage::save_session_name(&user.name);
    log::info!("Signed in as {}", user.name);
    set_auth_state.set(AuthState { user: Some(user) });
    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_requires_a_name() {
        assert!(sign_in("").is_err());
        assert!(sign_in("   ").is_err());
        let user = sign_in("  Jane Smith ").unwrap();
        assert_eq!(user.name, "Jane Smith");
        assert_eq!(user.role, DEMO_ROLE);
    }

    #[test]
    fn test_default_state_is_signed_out() {
        assert!(!AuthState::default().is_signed_in());
    }
}
