use std::path::PathBuf;
use std::sync::Arc;

use crate::state::access_config::AccessConfig;
use crate::state::app_state::AppState;
use crate::store::{FlagStore, FsFlagStore, MemoryFlagStore};

/// Builder for creating AppState instances (used in both tests and main).
pub struct StateBuilder {
    access: AccessConfig,
    flag_dir: Option<PathBuf>,
    store: Option<Arc<dyn FlagStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            access: AccessConfig::default(),
            flag_dir: None,
            store: None,
        }
    }

    pub fn with_access(mut self, access: AccessConfig) -> Self {
        self.access = access;
        self
    }

    /// Serve flags from a directory of `{CODE}.png` files.
    pub fn with_flag_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.flag_dir = Some(dir.into());
        self
    }

    /// Inject a store directly. Takes precedence over `with_flag_dir`;
    /// this is the seam tests use to supply fakes.
    pub fn with_store(mut self, store: Arc<dyn FlagStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> AppState {
        let store: Arc<dyn FlagStore> = match (self.store, self.flag_dir) {
            (Some(store), _) => store,
            (None, Some(dir)) => Arc::new(FsFlagStore::new(dir)),
            (None, None) => Arc::new(MemoryFlagStore::new()),
        };

        AppState::new(store, self.access)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
