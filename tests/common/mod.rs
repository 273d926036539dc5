//! Shared helpers for the REST integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use bleutrade_api_client::auth::{NonceProvider, StaticCredentials};
use bleutrade_api_client::rest::BleutradeRestClient;
use wiremock::MockServer;

pub const TEST_KEY: &str = "test_key";
pub const TEST_SECRET: &str = "test_secret";
pub const TEST_NONCE: u64 = 1_700_000_000;

/// Nonce provider that always returns the same value.
pub struct FixedNonce(pub u64);

impl NonceProvider for FixedNonce {
    fn next_nonce(&self) -> u64 {
        self.0
    }
}

/// Install a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn build_public_client(server: &MockServer) -> BleutradeRestClient {
    init_tracing();
    BleutradeRestClient::builder().base_url(server.uri()).build()
}

pub fn build_private_client(server: &MockServer) -> BleutradeRestClient {
    init_tracing();
    BleutradeRestClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new(TEST_KEY, TEST_SECRET)))
        .nonce_provider(Arc::new(FixedNonce(TEST_NONCE)))
        .build()
}

pub fn success(result: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "success": "true",
        "message": "",
        "result": result
    })
}
