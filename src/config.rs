use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::logging;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AppConfig {
    #[serde(default)]
    pub verbose_logging: bool,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub always_on_top: bool,
    #[serde(default = "default_true")]
    pub confirm_exit: bool,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose_logging: false,
            language: default_language(),
            always_on_top: false,
            confirm_exit: true,
        }
    }
}

/// Get the application root directory
pub fn get_app_root_dir() -> Result<PathBuf, String> {
    // Portable mode check (highest priority): a file named "portable" next to
    // the executable pins all state to that directory (e.g. USB drives).
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if exe_dir.join("portable").exists() {
                return Ok(exe_dir.to_path_buf());
            }
        }
    }

    // In Debug mode, keep using the executable directory (portable/dev experience)
    if cfg!(debug_assertions) {
        let exe_path =
            std::env::current_exe().map_err(|e| format!("Failed to get exe path: {}", e))?;
        let exe_dir = exe_path.parent().ok_or("Failed to get exe directory")?;
        return Ok(exe_dir.to_path_buf());
    }

    // In Release mode, use standard platform-specific user data directories
    #[cfg(target_os = "linux")]
    {
        let home =
            std::env::var("HOME").map_err(|_| "Failed to resolve HOME variable".to_string())?;
        let path = PathBuf::from(home).join(".config").join("scriptdock");
        if !path.exists() {
            let _ = fs::create_dir_all(&path);
        }
        Ok(path)
    }

    #[cfg(target_os = "macos")]
    {
        let home =
            std::env::var("HOME").map_err(|_| "Failed to resolve HOME variable".to_string())?;
        let path = PathBuf::from(home)
            .join("Library")
            .join("Application Support")
            .join("scriptdock");
        if !path.exists() {
            let _ = fs::create_dir_all(&path);
        }
        Ok(path)
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            let path = PathBuf::from(appdata).join("scriptdock");
            if !path.exists() {
                let _ = fs::create_dir_all(&path);
            }
            return Ok(path);
        }
        // Fallback to exe dir if APPDATA missing (unlikely)
        let exe_path =
            std::env::current_exe().map_err(|e| format!("Failed to get exe path: {}", e))?;
        let exe_dir = exe_path.parent().ok_or("Failed to get exe directory")?;
        Ok(exe_dir.to_path_buf())
    }

    // Fallback for other OS (mobile targets keep state next to the app sandbox root)
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        let exe_path =
            std::env::current_exe().map_err(|e| format!("Failed to get exe path: {}", e))?;
        let exe_dir = exe_path.parent().ok_or("Failed to get exe directory")?;
        Ok(exe_dir.to_path_buf())
    }
}

/// Get the configuration directory: config/
pub fn get_config_dir() -> Result<PathBuf, String> {
    let root = get_app_root_dir()?;
    let config_dir = root.join("config");

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }
    Ok(config_dir)
}

/// Get data directory: data/
pub fn get_data_dir() -> Result<PathBuf, String> {
    let root = get_app_root_dir()?;
    let data_dir = root.join("data");

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)
            .map_err(|e| format!("Failed to create data directory: {}", e))?;
    }
    Ok(data_dir)
}

fn get_config_path() -> Result<PathBuf, String> {
    Ok(get_config_dir()?.join("config.json"))
}

#[tauri::command]
pub fn save_config(config: AppConfig) -> Result<(), String> {
    let config_path = get_config_path()?;

    let json = serde_json::to_string_pretty(&config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    fs::write(&config_path, json).map_err(|e| format!("Failed to write config: {}", e))?;
    let _ = logging::write_domain_log("audit", "Updated application configuration");
    Ok(())
}

#[tauri::command]
pub fn load_config() -> Result<AppConfig, String> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        return Ok(AppConfig::default());
    }

    let content =
        fs::read_to_string(&config_path).map_err(|e| format!("Failed to read config: {}", e))?;

    match serde_json::from_str::<AppConfig>(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            log::warn!("Failed to parse config.json, using defaults: {}", e);
            Ok(AppConfig::default())
        }
    }
}

#[tauri::command]
pub fn open_config_dir() -> Result<(), String> {
    let path = get_config_dir()?;
    open_directory(path)
}

#[tauri::command]
pub fn open_logs_dir() -> Result<(), String> {
    let root = get_app_root_dir()?;
    let path = root.join("logs");
    if !path.exists() {
        fs::create_dir_all(&path).map_err(|e| e.to_string())?;
    }
    open_directory(path)
}

fn open_directory(path: std::path::PathBuf) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("explorer")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to open directory: {}", e))?;
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to open directory: {}", e))?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to open directory: {}", e))?;
    }

    Ok(())
}
