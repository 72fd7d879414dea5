//! Menu Persistence
//!
//! The whole menu is serialized to a single localStorage key after every
//! mutation, so the persisted and in-memory stores never diverge. The
//! backend sits behind a trait so tests run against an in-memory map.

use crate::models::MenuStore;

/// localStorage key holding the serialized menu
const STORAGE_KEY: &str = "menu";

/// Key-value backend seam
pub trait MenuStorage {
    fn read(&self) -> Option<String>;
    fn write(&self, payload: &str);
}

/// window.localStorage backend
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> web_sys::Storage {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .expect("localStorage should be available")
    }
}

impl MenuStorage for BrowserStorage {
    fn read(&self) -> Option<String> {
        Self::local_storage().get_item(STORAGE_KEY).ok().flatten()
    }

    fn write(&self, payload: &str) {
        // Quota errors abort the action; there is no retry path
        Self::local_storage()
            .set_item(STORAGE_KEY, payload)
            .expect("localStorage write failed");
    }
}

/// Load the persisted menu, falling back to the empty five-category store
/// when nothing is stored or the payload does not parse
pub fn load(storage: &dyn MenuStorage) -> MenuStore {
    let Some(raw) = storage.read() else {
        return MenuStore::default();
    };
    match serde_json::from_str::<MenuStore>(&raw) {
        Ok(mut menu) => {
            menu.assign_missing_ids();
            menu
        }
        Err(err) => {
            if cfg!(target_arch = "wasm32") {
                web_sys::console::error_1(
                    &format!("[STORAGE] discarding unparsable menu: {}", err).into(),
                );
            }
            MenuStore::default()
        }
    }
}

/// Serialize and write the full store as a single key write
pub fn save(storage: &dyn MenuStorage, menu: &MenuStore) {
    let payload = serde_json::to_string(menu).expect("menu serialization failed");
    storage.write(&payload);
}
