use crate::common::error::ToTauriError;
use crate::common::models::BridgeResponse;
use crate::prefs::storage::PrefStore;

#[tauri::command]
pub fn save_user_data(key: String, value: String) -> BridgeResponse {
    let store = match PrefStore::from_config() {
        Ok(s) => s,
        Err(e) => return BridgeResponse::err(e.to_tauri_error()),
    };

    match store.set(&key, &value) {
        Ok(()) => BridgeResponse::ok("Data saved"),
        Err(e) => BridgeResponse::err(e.to_tauri_error()),
    }
}

#[tauri::command]
pub fn get_user_data(key: String) -> BridgeResponse {
    let store = match PrefStore::from_config() {
        Ok(s) => s,
        Err(e) => return BridgeResponse::err(e.to_tauri_error()),
    };

    BridgeResponse::from(store.get(&key))
}
