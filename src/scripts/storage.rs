use crate::common::error::ScriptError;
use std::fs;
use std::path::PathBuf;

/// File extension every stored script carries.
pub const SCRIPT_EXTENSION: &str = "lua";

/// Script storage with dependency injection support.
///
/// A script is nothing but a `<name>.lua` file in the base directory;
/// existence on disk is the sole source of truth.
pub struct ScriptStorage {
    pub base_dir: PathBuf,
}

impl ScriptStorage {
    /// Create storage with custom directory
    pub fn new(base_dir: PathBuf) -> Result<Self, ScriptError> {
        if !base_dir.exists() {
            fs::create_dir_all(&base_dir)?;
        }
        Ok(Self { base_dir })
    }

    /// Create storage from app config
    pub fn from_config() -> Result<Self, ScriptError> {
        let data_dir = crate::config::get_data_dir().map_err(ScriptError::Runtime)?;
        Self::new(data_dir.join("scripts"))
    }

    /// Strip path-traversal characters and reject names that end up empty.
    fn sanitize(name: &str) -> Result<String, ScriptError> {
        let safe = name.replace("..", "").replace('/', "").replace('\\', "");
        if safe.trim().is_empty() {
            return Err(ScriptError::InvalidName(name.to_string()));
        }
        Ok(safe)
    }

    fn script_path(&self, name: &str) -> Result<PathBuf, ScriptError> {
        let safe = Self::sanitize(name)?;
        Ok(self
            .base_dir
            .join(format!("{}.{}", safe, SCRIPT_EXTENSION)))
    }

    /// List stored script names (file stems, no extension, no ordering guarantee)
    pub fn list_scripts(&self) -> Result<Vec<String>, ScriptError> {
        let mut names = Vec::new();

        if let Ok(entries) = fs::read_dir(&self.base_dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some(SCRIPT_EXTENSION)
                {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_string());
                    }
                }
            }
        }

        Ok(names)
    }

    /// Read a stored script's source, failing when the file is absent
    pub fn load_script(&self, name: &str) -> Result<String, ScriptError> {
        let path = self.script_path(name)?;
        if !path.exists() {
            return Err(ScriptError::NotFound(name.to_string()));
        }
        Ok(fs::read_to_string(path)?)
    }

    /// Write script content, overwriting unconditionally
    pub fn save_script(&self, name: &str, content: &str) -> Result<(), ScriptError> {
        let path = self.script_path(name)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Delete a stored script; deleting an absent script is not an error
    pub fn delete_script(&self, name: &str) -> Result<(), ScriptError> {
        let path = self.script_path(name)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
