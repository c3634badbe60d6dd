use crate::common::error::PrefsError;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Flat string-to-string preference store backed by a single JSON file.
///
/// Writes are last-write-wins with no locking; bridge calls are serialized
/// by the single webview surface.
pub struct PrefStore {
    path: PathBuf,
}

impl PrefStore {
    /// Create a store at an explicit file path
    pub fn new(path: PathBuf) -> Result<Self, PrefsError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    /// Create the app store from config
    pub fn from_config() -> Result<Self, PrefsError> {
        let data_dir = crate::config::get_data_dir().map_err(PrefsError::Config)?;
        Self::new(data_dir.join("user_data.json"))
    }

    fn load(&self) -> Result<BTreeMap<String, String>, PrefsError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;

        match serde_json::from_str::<BTreeMap<String, String>>(&content) {
            Ok(map) => Ok(map),
            Err(e) => {
                log::warn!("Failed to parse preference store: {}. Starting empty.", e);
                Ok(BTreeMap::new())
            }
        }
    }

    fn persist(&self, map: &BTreeMap<String, String>) -> Result<(), PrefsError> {
        let json = serde_json::to_string_pretty(map)
            .map_err(|e| PrefsError::Serialization(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Read a value; an absent key is a preference miss
    pub fn get(&self, key: &str) -> Result<String, PrefsError> {
        self.load()?
            .remove(key)
            .ok_or_else(|| PrefsError::KeyNotFound(key.to_string()))
    }

    /// Write a value, overwriting any previous one
    pub fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut map = self.load()?;
        map.insert(key.to_string(), value.to_string());
        self.persist(&map)
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
    fn test_set_then_get() {
        let temp = TempDir::new().unwrap();
        let prefs = store(&temp);

        prefs.set("theme", "dark").unwrap();
        assert_eq!(prefs.get("theme").unwrap(), "dark");
    }

    #[test]
    fn test_missing_key() {
        let temp = TempDir::new().unwrap();
        let prefs = store(&temp);

        let err = prefs.get("nope").unwrap_err();
        assert!(matches!(err, PrefsError::KeyNotFound(_)));
        assert!(err.to_string().contains("Key not found"));
    }

    #[test]
    fn test_last_write_wins() {
        let temp = TempDir::new().unwrap();
        let prefs = store(&temp);

        prefs.set("theme", "dark").unwrap();
        prefs.set("theme", "light").unwrap();
        assert_eq!(prefs.get("theme").unwrap(), "light");
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp = TempDir::new().unwrap();
        store(&temp).set("lang", "en").unwrap();

        let reopened = store(&temp);
        assert_eq!(reopened.get("lang").unwrap(), "en");
    }

    #[test]
    fn test_corrupt_store_degrades_to_empty() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("user_data.json"), "{not json").unwrap();

        let prefs = store(&temp);
        assert!(prefs.get("anything").is_err());
        // And it is writable again afterwards
        prefs.set("k", "v").unwrap();
        assert_eq!(prefs.get("k").unwrap(), "v");
    }
}
