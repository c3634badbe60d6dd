use crate::common::error::ToTauriError;
use crate::common::models::BridgeResponse;
use crate::logging;
use crate::market::catalog;
use crate::market::model::MarketListing;
use crate::scripts::storage::ScriptStorage;

#[tauri::command]
pub fn market_fetch() -> Result<Vec<MarketListing>, String> {
    Ok(catalog::listings())
}

/// Mock purchase: no billing, no entitlement check. The listing's script is
/// generated and written to the scripts directory under the listing id.
#[tauri::command]
pub fn market_purchase(id: String) -> BridgeResponse {
    let storage = match ScriptStorage::from_config() {
        Ok(s) => s,
        Err(e) => return BridgeResponse::err(e.to_tauri_error()),
    };
    purchase_with(&storage, &id)
}

fn purchase_with(storage: &ScriptStorage, id: &str) -> BridgeResponse {
    let listing = match catalog::find(id) {
        Some(l) => l,
        None => return BridgeResponse::err(format!("Listing not found: {}", id)),
    };

    let source = catalog::mock_script_source(&listing);
    match storage.save_script(&listing.id, &source) {
        Ok(()) => {
            let _ = logging::write_domain_log(
                "audit",
                &format!("Purchased script from market: {}", listing.id),
            );
            BridgeResponse::ok("Script downloaded successfully")
        }
        Err(e) => BridgeResponse::err(e.to_tauri_error()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_purchase_materializes_script() {
        let temp = TempDir::new().unwrap();
        let storage = ScriptStorage::new(temp.path().to_path_buf()).unwrap();

        let envelope = purchase_with(&storage, "file_organizer");
        assert!(envelope.success);

        let names = storage.list_scripts().unwrap();
        assert_eq!(names, vec!["file_organizer".to_string()]);
    }

    #[test]
    fn test_purchase_unknown_listing() {
        let temp = TempDir::new().unwrap();
        let storage = ScriptStorage::new(temp.path().to_path_buf()).unwrap();

        let envelope = purchase_with(&storage, "nope");
        assert!(!envelope.success);
        assert!(envelope.error.unwrap().contains("not found"));
    }

    #[test]
    fn test_repurchase_overwrites() {
        let temp = TempDir::new().unwrap();
        let storage = ScriptStorage::new(temp.path().to_path_buf()).unwrap();

        storage.save_script("pdf_merger", "-- stale").unwrap();
        let envelope = purchase_with(&storage, "pdf_merger");
        assert!(envelope.success);

        let source = storage.load_script("pdf_merger").unwrap();
        assert!(source.contains("run_automation"));
        assert_eq!(storage.list_scripts().unwrap().len(), 1);
    }
}
