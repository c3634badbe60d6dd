use crate::common::error::{PrefsError, ToTauriError};
use crate::common::models::BridgeResponse;
use crate::logging;
use crate::prefs::storage::PrefStore;
use serde::{Deserialize, Serialize};

/// Preference key the current user is stored under, as a JSON blob.
const CURRENT_USER_KEY: &str = "current_user";

const MIN_PASSWORD_LEN: usize = 6;

/// The signed-in user. There is no real authentication: whatever was typed
/// at login is what gets stored, last-write-wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    pub join_date: String,
}

impl User {
    fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            name,
            email: email.to_string(),
            join_date: chrono::Utc::now().to_rfc3339(),
        }
    }
}

fn store_user(store: &PrefStore, user: &User) -> Result<(), PrefsError> {
    let json = serde_json::to_string(user)
        .map_err(|e| PrefsError::Serialization(e.to_string()))?;
    store.set(CURRENT_USER_KEY, &json)
}

fn load_user(store: &PrefStore) -> Result<Option<User>, PrefsError> {
    let raw = match store.get(CURRENT_USER_KEY) {
        Ok(raw) => raw,
        Err(PrefsError::KeyNotFound(_)) => return Ok(None),
        Err(e) => return Err(e),
    };
    // Logout writes the empty string rather than removing the key
    if raw.is_empty() {
        return Ok(None);
    }
    let user = serde_json::from_str(&raw)
        .map_err(|e| PrefsError::Serialization(e.to_string()))?;
    Ok(Some(user))
}

#[tauri::command]
pub fn login(email: String, password: String) -> BridgeResponse {
    let store = match PrefStore::from_config() {
        Ok(s) => s,
        Err(e) => return BridgeResponse::err(e.to_tauri_error()),
    };
    login_with(&store, &email, &password)
}

fn login_with(store: &PrefStore, email: &str, password: &str) -> BridgeResponse {
    if email.trim().is_empty() || password.is_empty() {
        return BridgeResponse::err("Please fill in all fields");
    }

    let user = User::from_email(email.trim());
    match store_user(store, &user) {
        Ok(()) => {
            let _ = logging::write_domain_log("audit", &format!("User login: {}", user.email));
            BridgeResponse::ok(user)
        }
        Err(e) => BridgeResponse::err(e.to_tauri_error()),
    }
}

#[tauri::command]
pub fn register(name: String, email: String, password: String, confirm: String) -> BridgeResponse {
    let store = match PrefStore::from_config() {
        Ok(s) => s,
        Err(e) => return BridgeResponse::err(e.to_tauri_error()),
    };
    register_with(&store, &name, &email, &password, &confirm)
}

fn register_with(
    store: &PrefStore,
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> BridgeResponse {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return BridgeResponse::err("Please fill in all fields");
    }
    if password != confirm {
        return BridgeResponse::err("Passwords do not match");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return BridgeResponse::err("Password must be at least 6 characters");
    }

    let user = User {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        join_date: chrono::Utc::now().to_rfc3339(),
    };
    match store_user(store, &user) {
        Ok(()) => {
            let _ =
                logging::write_domain_log("audit", &format!("User registered: {}", user.email));
            BridgeResponse::ok(user)
        }
        Err(e) => BridgeResponse::err(e.to_tauri_error()),
    }
}

#[tauri::command]
pub fn logout() -> BridgeResponse {
    let store = match PrefStore::from_config() {
        Ok(s) => s,
        Err(e) => return BridgeResponse::err(e.to_tauri_error()),
    };

    match store.set(CURRENT_USER_KEY, "") {
        Ok(()) => {
            let _ = logging::write_domain_log("audit", "User logout");
            BridgeResponse::ok("Logged out")
        }
        Err(e) => BridgeResponse::err(e.to_tauri_error()),
    }
}

#[tauri::command]
pub fn current_user() -> BridgeResponse {
    let store = match PrefStore::from_config() {
        Ok(s) => s,
        Err(e) => return BridgeResponse::err(e.to_tauri_error()),
    };

    match load_user(&store) {
        Ok(Some(user)) => BridgeResponse::ok(user),
        Ok(None) => BridgeResponse::err("Not logged in"),
        Err(e) => BridgeResponse::err(e.to_tauri_error()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(temp: &TempDir) -> PrefStore {
        PrefStore::new(temp.path().join("user_data.json")).unwrap()
    }

    #[test]
    fn test_login_stores_user() {
        let temp = TempDir::new().unwrap();
        let prefs = store(&temp);

        let envelope = login_with(&prefs, "ada@example.com", "hunter2");
        assert!(envelope.success);

        let user = load_user(&prefs).unwrap().unwrap();
        assert_eq!(user.name, "ada");
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn test_login_requires_both_fields() {
        let temp = TempDir::new().unwrap();
        let prefs = store(&temp);

        assert!(!login_with(&prefs, "", "pw").success);
        assert!(!login_with(&prefs, "a@b.c", "").success);
        assert!(load_user(&prefs).unwrap().is_none());
    }

    #[test]
    fn test_register_validations() {
        let temp = TempDir::new().unwrap();
        let prefs = store(&temp);

        let mismatch = register_with(&prefs, "Ada", "ada@example.com", "secret1", "secret2");
        assert!(mismatch.error.unwrap().contains("do not match"));

        let short = register_with(&prefs, "Ada", "ada@example.com", "abc", "abc");
        assert!(short.error.unwrap().contains("at least 6"));

        let ok = register_with(&prefs, "Ada", "ada@example.com", "secret1", "secret1");
        assert!(ok.success);
    }

    #[test]
    fn test_logout_clears_user() {
        let temp = TempDir::new().unwrap();
        let prefs = store(&temp);

        login_with(&prefs, "ada@example.com", "pw");
        prefs.set(CURRENT_USER_KEY, "").unwrap();

        assert!(load_user(&prefs).unwrap().is_none());
    }
}
