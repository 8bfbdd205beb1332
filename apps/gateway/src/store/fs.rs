use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

use super::{FlagStore, StoreError};

/// Flag store backed by a directory of `{CODE}.png` files.
///
/// The directory is populated by external upload tooling; the gateway treats
/// it as read-only.
#[derive(Debug, Clone)]
pub struct FsFlagStore {
    root: PathBuf,
}

impl FsFlagStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl FlagStore for FsFlagStore {
    async fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        match tokio::fs::read(self.root.join(key)).await {
            Ok(bytes) => Ok(Some(Bytes::from(bytes))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
