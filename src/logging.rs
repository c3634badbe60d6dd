use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::panic;
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;

struct LogEntry {
    domain: String,
    message: String,
    timestamp: String,
}

lazy_static::lazy_static! {
    static ref LOG_TX: Mutex<Option<mpsc::Sender<LogEntry>>> = Mutex::new(None);
    static ref LOG_DIR_PATH: Mutex<Option<PathBuf>> = Mutex::new(None);
}

fn domain_file(domain: &str) -> &'static str {
    match domain {
        "audit" => "audit.log",
        "script" => "script.log",
        "crash" => "crash.log",
        _ => "custom.log",
    }
}

/// Initialize the log directory and start the background logger thread
pub fn init_log_dir(path: PathBuf) {
    // Store path for panic hook
    if let Ok(mut dir) = LOG_DIR_PATH.lock() {
        *dir = Some(path.clone());
    }

    let (tx, rx) = mpsc::channel::<LogEntry>();

    if let Ok(mut global_tx) = LOG_TX.lock() {
        *global_tx = Some(tx);
    }

    // Spawn background worker that owns the file handles
    thread::spawn(move || {
        let mut file_cache: HashMap<String, File> = HashMap::new();
        let log_dir = path.join("logs");

        if !log_dir.exists() {
            let _ = std::fs::create_dir_all(&log_dir);
        }

        while let Ok(entry) = rx.recv() {
            let filename = domain_file(&entry.domain);
            let file_path = log_dir.join(filename);

            let file = file_cache.entry(filename.to_string()).or_insert_with(|| {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&file_path)
                    .unwrap_or_else(|_| File::create(&file_path).unwrap())
            });

            let line = format!(
                "[{}] [{}] {}",
                entry.timestamp,
                entry.domain.to_uppercase(),
                entry.message
            );
            if let Err(e) = writeln!(file, "{}", line) {
                eprintln!("Failed to write log: {}", e);
            }
        }
    });
}

/// Setup panic hook to log crashes to crash.log
/// Note: the hook runs in the crashing thread, so it writes the file directly
/// instead of going through the channel (the logger thread may be gone).
pub fn setup_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let msg = format!(
            "{}\nBacktrace: {:?}\n",
            info,
            std::backtrace::Backtrace::capture()
        );
        eprintln!("{}", msg);

        if let Ok(guard) = LOG_DIR_PATH.lock() {
            if let Some(ref dir) = *guard {
                let crash_file = dir.join("logs").join("crash.log");
                if let Some(parent) = crash_file.parent() {
                    let _ = std::fs::create_dir_all(parent);
                }

                if let Ok(mut file) = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(crash_file)
                {
                    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                    let _ = writeln!(file, "[{}] {}", timestamp, msg);
                }
            }
        }
    }));
}

/// Queue a message to be written to a specialized domain log file
pub fn write_domain_log(domain: &str, message: &str) -> std::io::Result<()> {
    if let Ok(guard) = LOG_TX.lock() {
        if let Some(tx) = &*guard {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
            let _ = tx.send(LogEntry {
                domain: domain.to_string(),
                message: message.to_string(),
                timestamp,
            });
            return Ok(());
        }
    }
    // Logger not initialized yet (early startup, or unit tests)
    Err(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Logger not initialized",
    ))
}

#[tauri::command]
pub fn log_domain_event(domain: String, message: String) {
    let _ = write_domain_log(&domain, &message);
}

#[tauri::command]
pub fn get_logs(log_name: String, lines: usize) -> Result<Vec<String>, String> {
    let root_dir = crate::config::get_app_root_dir()?;
    let log_filename = match log_name.as_str() {
        "app" => "app.log",
        "audit" => "audit.log",
        "script" => "script.log",
        "crash" => "crash.log",
        _ => return Err(format!("Unknown log name: {}", log_name)),
    };

    let log_path = root_dir.join("logs").join(log_filename);

    if !log_path.exists() {
        return Ok(vec![format!("Log file {} not found.", log_filename)]);
    }

    let content = std::fs::read_to_string(&log_path).map_err(|e| e.to_string())?;
    let all_lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();
    let skip = all_lines.len().saturating_sub(lines);
    Ok(all_lines.into_iter().skip(skip).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_file_mapping() {
        assert_eq!(domain_file("audit"), "audit.log");
        assert_eq!(domain_file("script"), "script.log");
        assert_eq!(domain_file("crash"), "crash.log");
        assert_eq!(domain_file("something-else"), "custom.log");
    }
}
