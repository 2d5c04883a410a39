//! `localStorage` backed credential storage

use payflow_core::{CoreError, CoreResult, PersistentStore};
use web_sys::Storage;

/// [`PersistentStore`] over the window's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> CoreResult<Storage> {
        let window = web_sys::window().ok_or_else(|| CoreError::storage("no window"))?;
        window
            .local_storage()
            .map_err(|e| CoreError::storage(format!("{e:?}")))?
            .ok_or_else(|| CoreError::storage("localStorage is not available"))
    }
}

impl PersistentStore for LocalStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| CoreError::storage(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| CoreError::storage(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| CoreError::storage(format!("{e:?}")))
    }
}
