//! Common test utilities for integration tests.
//!
//! Re-exports the types most tests need and provides small helpers for
//! building Splunk-shaped response bodies.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use serde_json::{Value, json};

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use secrecy::SecretString;
#[allow(unused_imports)]
pub use splunk_client::{ClientError, Sourcetype, SplunkClient, endpoints};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token used by every mocked request.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

/// Build a client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> SplunkClient {
    SplunkClient::builder()
        .base_url(server.uri())
        .api_token(SecretString::new(TEST_TOKEN.to_string().into()))
        .build()
        .expect("client should build")
}

/// An `/services/data/indexes` listing with the given entry names.
#[allow(dead_code)]
pub fn index_listing(names: &[&str]) -> Value {
    let entries: Vec<Value> = names
        .iter()
        .map(|name| json!({ "name": name, "content": { "totalEventCount": "0" } }))
        .collect();
    json!({ "entry": entries, "paging": { "total": names.len(), "offset": 0 } })
}

/// A oneshot search response wrapping the given result rows.
#[allow(dead_code)]
pub fn oneshot_results(rows: Value) -> Value {
    json!({ "preview": false, "init_offset": 0, "messages": [], "results": rows })
}
