use std::sync::Arc;

use super::access_config::AccessConfig;
use crate::store::FlagStore;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Flag image store, injected so handlers can be tested against a fake
    store: Arc<dyn FlagStore>,
    /// Upstream access-layer configuration (cookie name)
    access: AccessConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn FlagStore>, access: AccessConfig) -> Self {
        Self { store, access }
    }

    pub fn store(&self) -> &dyn FlagStore {
        self.store.as_ref()
    }

    pub fn access(&self) -> &AccessConfig {
        &self.access
    }

    /// Test state backed by the given store and a default access config.
    #[cfg(test)]
    pub fn for_tests(store: Arc<dyn FlagStore>) -> Self {
        Self::new(store, AccessConfig::default())
    }
}
