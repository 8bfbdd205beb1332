#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use async_trait::async_trait;
use bytes::Bytes;
use gateway::{AccessConfig, AppState, FlagStore, MemoryFlagStore, StoreError};
use jsonwebtoken::{EncodingKey, Header};
use serde_json::Value;

// Logging is auto-installed for test binaries
#[ctor::ctor]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

/// Cookie name the default [`AccessConfig`] expects.
pub const COOKIE_NAME: &str = "CF_Authorization";

/// Mint a real three-segment HS256 token around the given claims payload.
///
/// The gateway never verifies the signature, so the signing secret here is
/// arbitrary; what matters is that the payload segment decodes to `claims`.
pub fn mint_token(claims: &Value) -> String {
    jsonwebtoken::encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(b"gateway-test-secret"),
    )
    .expect("token minting should not fail")
}

/// `Cookie` header value carrying the credential token.
pub fn auth_cookie(token: &str) -> String {
    format!("{COOKIE_NAME}={token}")
}

/// AppState over an in-memory store seeded with the given objects.
pub fn state_with_flags(flags: &[(&str, &[u8])]) -> AppState {
    let mut store = MemoryFlagStore::new();
    for (key, blob) in flags {
        store.insert(*key, Bytes::copy_from_slice(blob));
    }
    AppState::new(Arc::new(store), AccessConfig::default())
}

pub fn empty_state() -> AppState {
    state_with_flags(&[])
}

/// Store whose reads always fail, for exercising the 500 path.
pub struct FailingStore;

#[async_trait]
impl FlagStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<Bytes>, StoreError> {
        Err(StoreError::Backend(
            "injected failure reading flag object".to_string(),
        ))
    }
}

pub fn failing_state() -> AppState {
    AppState::new(Arc::new(FailingStore), AccessConfig::default())
}

pub async fn body_string<B>(resp: ServiceResponse<B>) -> String
where
    B: MessageBody,
{
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("response body should be utf-8")
}
