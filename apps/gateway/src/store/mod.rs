//! Blob store port for flag images.
//!
//! The store itself is provisioned and populated externally; the gateway only
//! ever reads from it. Implementations are injected through
//! [`AppState`](crate::state::app_state::AppState) so handlers stay testable
//! against a fake.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub mod fs;
pub mod memory;

pub use fs::FsFlagStore;
pub use memory::MemoryFlagStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("store backend: {0}")]
    Backend(String),
}

/// Read-only key/value blob store holding flag images.
#[async_trait]
pub trait FlagStore: Send + Sync {
    /// Fetch the object stored under `key`, or `None` if no such object
    /// exists. Any other failure is a [`StoreError`].
    async fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError>;
}

/// Object key for a normalized two-letter country code, e.g. `US` -> `US.png`.
pub fn flag_object_key(code: &str) -> String {
    format!("{code}.png")
}

#[cfg(test)]
mod tests {
    use super::flag_object_key;

    #[test]
    fn key_appends_png_suffix() {
        assert_eq!(flag_object_key("US"), "US.png");
    }
}
