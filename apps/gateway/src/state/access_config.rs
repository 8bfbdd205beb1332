use std::env;

/// Name of the cookie the upstream access layer sets on authenticated
/// requests.
const DEFAULT_COOKIE_NAME: &str = "CF_Authorization";

/// Configuration for the upstream access-control boundary.
#[derive(Debug, Clone)]
pub struct AccessConfig {
    cookie_name: String,
}

impl AccessConfig {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
        }
    }

    /// Read the cookie name from `GATEWAY_COOKIE_NAME`, falling back to the
    /// access layer's default.
    pub fn from_env() -> Self {
        match env::var("GATEWAY_COOKIE_NAME") {
            Ok(name) if !name.trim().is_empty() => Self::new(name.trim().to_string()),
            _ => Self::default(),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COOKIE_NAME)
    }
}
