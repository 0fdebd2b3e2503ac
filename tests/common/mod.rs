//! Shared helpers for the HTTP-level tests

#![allow(dead_code)]

use axum_test::TestServer;
use payroll::server::ServerBuilder;
use payroll::storage::Stores;
use serde_json::Value;

/// Test server over fresh in-memory stores with root-relative links
pub fn test_server() -> TestServer {
    test_server_with(Stores::in_memory(), "")
}

/// Test server over `stores`, with links prefixed by `public_url`
pub fn test_server_with(stores: Stores, public_url: &str) -> TestServer {
    let app = ServerBuilder::new()
        .with_public_url(public_url)
        .register_stores(stores)
        .build()
        .expect("Failed to build router");
    TestServer::try_new(app).expect("Failed to create test server")
}

/// `href` of link `rel` in a HAL representation
pub fn href<'a>(body: &'a Value, rel: &str) -> Option<&'a str> {
    body["_links"][rel]["href"].as_str()
}

/// Path part of a self link, usable as a request URI
pub fn self_path(body: &Value) -> String {
    href(body, "self").expect("representation has a self link").to_string()
}
