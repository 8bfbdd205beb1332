//! Environment-driven configuration for the gateway.

pub mod http;
pub mod store;

pub use http::HttpConfig;
pub use store::StoreConfig;
