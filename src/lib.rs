mod common;
mod config;
mod logging;
mod market;
mod prefs;
mod scripts;
mod session;

use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load existing config or use default
    let app_config = config::load_config().unwrap_or_default();

    // Initialize specialized logging (crash, audit, script)
    if let Ok(root_dir) = config::get_app_root_dir() {
        logging::init_log_dir(root_dir);
        logging::setup_panic_hook();
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            // When a second instance is launched, focus the existing window
            let windows = app.webview_windows();
            if let Some(window) = windows.values().next() {
                let _ = window.set_focus();
                let _ = window.unminimize();
            }
        }))
        .plugin(tauri_plugin_process::init())
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(
            tauri_plugin_log::Builder::default()
                .level(if app_config.verbose_logging {
                    log::LevelFilter::Debug
                } else {
                    log::LevelFilter::Info
                })
                .level_for(
                    "scriptdock",
                    if app_config.verbose_logging {
                        log::LevelFilter::Trace
                    } else {
                        log::LevelFilter::Debug
                    },
                )
                .targets([
                    tauri_plugin_log::Target::new(tauri_plugin_log::TargetKind::Stdout),
                    tauri_plugin_log::Target::new(tauri_plugin_log::TargetKind::Folder {
                        path: config::get_app_root_dir().unwrap_or_default().join("logs"),
                        file_name: Some("app".to_string()),
                    }),
                ])
                .rotation_strategy(tauri_plugin_log::RotationStrategy::KeepOne)
                .timezone_strategy(tauri_plugin_log::TimezoneStrategy::UseLocal)
                .build(),
        )
        .plugin(tauri_plugin_fs::init())
        .setup(move |app| {
            // Apply Always on Top if enabled in config
            if app_config.always_on_top {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_always_on_top(true);
                }
            }

            // Make sure the scripts directory exists before the UI asks for a listing
            if let Err(e) = scripts::storage::ScriptStorage::from_config() {
                log::warn!("Failed to prepare scripts directory: {}", e);
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            config::load_config,
            config::save_config,
            config::open_config_dir,
            config::open_logs_dir,
            scripts::commands::list_scripts,
            scripts::commands::get_script_content,
            scripts::commands::run_script,
            scripts::commands::download_script,
            scripts::commands::delete_script,
            prefs::commands::save_user_data,
            prefs::commands::get_user_data,
            market::commands::market_fetch,
            market::commands::market_purchase,
            session::login,
            session::register,
            session::logout,
            session::current_user,
            common::utils::show_toast,
            common::utils::get_system_info,
            logging::log_domain_event,
            logging::get_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
