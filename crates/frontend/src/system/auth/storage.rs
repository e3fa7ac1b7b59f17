use contracts::system::auth::UserInfo;
use web_sys::window;

const TOKEN_KEY: &str = "portfolio_auth_token";
const USER_KEY: &str = "portfolio_auth_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the signed-in session to localStorage
pub fn save_session(token: Option<&str>, user: &UserInfo) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match token {
        Some(token) => {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::warn!("Could not persist auth token");
            }
        }
        None => {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
    match serde_json::to_string(user) {
        Ok(json) => {
            if storage.set_item(USER_KEY, &json).is_err() {
                log::warn!("Could not persist session user");
            }
        }
        Err(e) => log::warn!("Failed to serialize session user: {}", e),
    }
}

/// Load a previously saved session; a corrupt entry is dropped
pub fn load_session() -> Option<(Option<String>, UserInfo)> {
    let storage = get_local_storage()?;
    let json = storage.get_item(USER_KEY).ok()??;
    match serde_json::from_str::<UserInfo>(&json) {
        Ok(user) => {
            let token = storage.get_item(TOKEN_KEY).ok().flatten();
            Some((token, user))
        }
        Err(e) => {
            log::warn!("Discarding stored session: {}", e);
            clear_session();
            None
        }
    }
}

/// Clear the stored session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
