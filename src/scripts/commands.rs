use crate::common::error::ToTauriError;
use crate::common::models::BridgeResponse;
use crate::logging;
use crate::scripts::engine;
use crate::scripts::storage::ScriptStorage;

fn storage() -> Result<ScriptStorage, String> {
    ScriptStorage::from_config().map_err(|e| e.to_tauri_error())
}

#[tauri::command]
pub fn list_scripts() -> BridgeResponse {
    let storage = match storage() {
        Ok(s) => s,
        Err(e) => return BridgeResponse::err(e),
    };
    BridgeResponse::from(storage.list_scripts())
}

#[tauri::command]
pub fn get_script_content(name: String) -> BridgeResponse {
    let storage = match storage() {
        Ok(s) => s,
        Err(e) => return BridgeResponse::err(e),
    };
    BridgeResponse::from(storage.load_script(&name))
}

#[tauri::command]
pub fn run_script(name: String, input: String) -> BridgeResponse {
    let storage = match storage() {
        Ok(s) => s,
        Err(e) => return BridgeResponse::err(e),
    };
    run_script_with(&storage, &name, &input)
}

/// Load-then-evaluate against an explicit storage, so the envelope semantics
/// are testable without the app's data directory.
fn run_script_with(storage: &ScriptStorage, name: &str, input: &str) -> BridgeResponse {
    let source = match storage.load_script(name) {
        Ok(source) => source,
        Err(e) => return BridgeResponse::err(e.to_tauri_error()),
    };

    match engine::evaluate(name, &source, input) {
        Ok(output) => {
            let _ = logging::write_domain_log("script", &format!("Executed script: {}", name));
            BridgeResponse::ok(output)
        }
        Err(e) => {
            let _ = logging::write_domain_log(
                "script",
                &format!("Script {} failed: {}", name, e),
            );
            BridgeResponse::err(e.to_tauri_error())
        }
    }
}

#[tauri::command]
pub fn download_script(name: String, content: String) -> BridgeResponse {
    let storage = match storage() {
        Ok(s) => s,
        Err(e) => return BridgeResponse::err(e),
    };

    match storage.save_script(&name, &content) {
        Ok(()) => {
            let _ = logging::write_domain_log("audit", &format!("Saved script: {}", name));
            BridgeResponse::ok("Script downloaded successfully")
        }
        Err(e) => BridgeResponse::err(e.to_tauri_error()),
    }
}

#[tauri::command]
pub fn delete_script(name: String) -> BridgeResponse {
    let storage = match storage() {
        Ok(s) => s,
        Err(e) => return BridgeResponse::err(e),
    };

    match storage.delete_script(&name) {
        Ok(()) => {
            let _ = logging::write_domain_log("audit", &format!("Deleted script: {}", name));
            BridgeResponse::ok("Script deleted")
        }
        Err(e) => BridgeResponse::err(e.to_tauri_error()),
    }
}
