//! `localStorage` backend for stored sessions

use fleetease::{KeyValueStore, StoreError};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn unavailable() -> StoreError {
    StoreError::Unavailable("localStorage is not available".to_string())
}

/// Browser `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()
            .ok_or_else(unavailable)?
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        local_storage()
            .ok_or_else(unavailable)?
            .remove_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trip() {
        let store = LocalStorage;
        store.set("fleetease_test_key", "value").unwrap();
        assert_eq!(store.get("fleetease_test_key").as_deref(), Some("value"));
        store.remove("fleetease_test_key").unwrap();
        assert_eq!(store.get("fleetease_test_key"), None);
    }
}
