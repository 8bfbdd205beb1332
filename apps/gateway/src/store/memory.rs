use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;

use super::{FlagStore, StoreError};

/// In-memory flag store. Used by tests and as the fallback when no flag
/// directory is configured.
#[derive(Debug, Clone, Default)]
pub struct MemoryFlagStore {
    objects: HashMap<String, Bytes>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, blob: impl Into<Bytes>) {
        self.objects.insert(key.into(), blob.into());
    }
}

#[async_trait]
impl FlagStore for MemoryFlagStore {
    async fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        Ok(self.objects.get(key).cloned())
    }
}
