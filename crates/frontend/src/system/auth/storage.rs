use web_sys::window;

const SESSION_NAME_KEY: &str = "procurehub_session_name";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Remember the signed-in name in localStorage
pub fn save_session_name(name: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(SESSION_NAME_KEY, name);
    }
}

/// Name of the last signed-in user, if any
pub fn get_session_name() -> Option<String> {
    get_local_storage()?.get_item(SESSION_NAME_KEY).ok()?
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_NAME_KEY);
    }
}
