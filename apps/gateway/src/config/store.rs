use std::env;
use std::path::PathBuf;

/// Location of the externally provisioned flag directory.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub flag_dir: Option<PathBuf>,
}

impl StoreConfig {
    /// Read `GATEWAY_FLAG_DIR` from the environment.
    ///
    /// Returns an empty config when unset; the state builder then falls back
    /// to an empty in-memory store, which is enough for local smoke runs.
    pub fn from_env() -> Self {
        let flag_dir = env::var("GATEWAY_FLAG_DIR")
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Self { flag_dir }
    }
}
