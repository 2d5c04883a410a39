//! Persistent key-value storage seam
//!
//! The browser build backs this with `localStorage`. Tests use the in-memory
//! stores from the `testing` module.

use crate::CoreResult;

/// Synchronous string key-value storage that outlives a page load
pub trait PersistentStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove(&self, key: &str) -> CoreResult<()>;
}
