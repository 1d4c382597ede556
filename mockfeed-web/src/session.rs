use anyhow::anyhow;
use gloo_storage::{LocalStorage, Storage};

// Stored as plain strings rather than JSON, like the login page always did
const KEY_LOGGED_IN: &str = "isLoggedIn";
const KEY_CURRENT_USER: &str = "currentUser";

pub fn is_logged_in() -> bool {
    matches!(LocalStorage::raw().get_item(KEY_LOGGED_IN), Ok(Some(v)) if v == "true")
}

/// Plaintext username typed at login
pub fn current_user() -> Option<String> {
    LocalStorage::raw().get_item(KEY_CURRENT_USER).ok().flatten()
}

pub fn log_in(user: &str) -> anyhow::Result<()> {
    let storage = LocalStorage::raw();
    storage
        .set_item(KEY_LOGGED_IN, "true")
        .map_err(|e| anyhow!("saving login flag: {e:?}"))?;
    storage
        .set_item(KEY_CURRENT_USER, user)
        .map_err(|e| anyhow!("saving current user: {e:?}"))?;
    tracing::info!(user, "logged in");
    Ok(())
}

/// The current user is kept, only the login flag goes away
pub fn log_out() {
    LocalStorage::delete(KEY_LOGGED_IN);
    tracing::info!("logged out");
}
