use thiserror::Error;

/// Common application errors
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Script-specific errors
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Script not found: {0}")]
    NotFound(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Invalid script name: {0}")]
    InvalidName(String),
}

impl From<mlua::Error> for ScriptError {
    fn from(e: mlua::Error) -> Self {
        ScriptError::Runtime(e.to_string())
    }
}

/// Preference-store errors
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Helper trait for converting errors to Tauri-compatible String errors
pub trait ToTauriError {
    fn to_tauri_error(self) -> String;
}

impl<E: std::error::Error> ToTauriError for E {
    fn to_tauri_error(self) -> String {
        self.to_string()
    }
}
