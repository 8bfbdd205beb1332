#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod health;
pub mod infra;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

// Re-exports for public API
pub use auth::claims::{decode_unverified, http_date, AccessClaims};
pub use auth::cookie::cookie_value;
pub use error::AppError;
pub use extractors::access_token::AccessToken;
pub use infra::state::build_state;
pub use middleware::request_trace::RequestTrace;
pub use middleware::security_headers::SecurityHeaders;
pub use middleware::structured_logger::StructuredLogger;
pub use state::access_config::AccessConfig;
pub use state::app_state::AppState;
pub use store::{flag_object_key, FlagStore, FsFlagStore, MemoryFlagStore, StoreError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}
