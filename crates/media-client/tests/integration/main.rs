// The http mocking library is not supported for wasm32
#![cfg(not(target_arch = "wasm32"))]

use media_client::{store::MemoryStore, Client, UserProfile};
use wiremock::MockServer;

mod auth;
mod contacts;
mod history;
mod media;

media_client_test::init_tracing_for_tests!();

/// A client talking to a fresh mock server, with nobody logged in.
async fn client_with_server() -> (Client, MockServer) {
    let server = MockServer::start().await;
    let client = Client::builder()
        .base_url(server.uri())
        .key_value_store(MemoryStore::new())
        .build()
        .await
        .unwrap();

    (client, server)
}

/// A client talking to a fresh mock server, logged in as `alice` with the
/// access token `abc123`.
async fn logged_in_client_with_server() -> (Client, MockServer) {
    let (client, server) = client_with_server().await;
    client
        .session_store()
        .login(UserProfile::new("alice"), "abc123", Some("zyx987".to_owned()))
        .await
        .unwrap();

    (client, server)
}
