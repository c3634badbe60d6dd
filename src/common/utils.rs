use crate::common::models::BridgeResponse;
use serde::Serialize;
use tauri::{AppHandle, Emitter};

#[derive(Serialize)]
pub struct SystemInfo {
    pub version: String,
    pub platform: String,
    pub arch: String,
    pub engine: String,
}

/// Forward a toast request to the webview, which renders the transient
/// notification itself (there is no native toast on desktop targets).
#[tauri::command]
pub fn show_toast(app: AppHandle, message: String) -> BridgeResponse {
    match app.emit("toast", &message) {
        Ok(()) => BridgeResponse::ok("Toast displayed"),
        Err(e) => BridgeResponse::err(e.to_string()),
    }
}

#[tauri::command]
pub fn get_system_info() -> SystemInfo {
    let platform = match std::env::consts::OS {
        "windows" => "Windows",
        "macos" => "macOS",
        "linux" => "Linux",
        _ => std::env::consts::OS,
    };

    let arch = match std::env::consts::ARCH {
        "x86_64" => "x64",
        "aarch64" => "ARM64",
        _ => std::env::consts::ARCH,
    };

    SystemInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        platform: platform.to_string(),
        arch: arch.to_string(),
        engine: "luau".to_string(),
    }
}
