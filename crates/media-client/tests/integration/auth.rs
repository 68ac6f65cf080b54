use assert_matches::assert_matches;
use assert_matches2::assert_let;
use media_client::{
    reqwest::StatusCode,
    store::{KeyValueStore, SessionDataKey},
    Access, Client, Error, HttpError, SessionChange, SessionState,
};
use media_client_test::test_json;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::{client_with_server, logged_in_client_with_server};

#[tokio::test]
async fn test_login_username() {
    let (client, server) = client_with_server().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({ "username": "alice", "password": "wordpass" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&*test_json::LOGIN))
        .expect(1)
        .mount(&server)
        .await;

    let mut changes = client.subscribe_to_session_changes();
    assert_eq!(client.access(), Access::RedirectToLogin);

    let response = client.auth().login_username("alice", "wordpass").await.unwrap();
    assert_eq!(response.user.username, "alice");

    assert!(client.logged_in());
    assert_eq!(client.access(), Access::Granted);
    assert_eq!(client.session_store().state(), SessionState::Authenticated);
    assert_eq!(client.user().unwrap().extra["email"], "alice@example.org");
    assert_eq!(client.access_token().as_deref(), Some("abc123"));
    assert_eq!(client.session_store().refresh_token().as_deref(), Some("zyx987"));
    assert_matches!(changes.try_recv(), Ok(SessionChange::LoggedIn));

    let store = client.session_store().key_value_store();
    assert_eq!(
        store.get_value(SessionDataKey::ACCESS_TOKEN).await.unwrap().as_deref(),
        Some("abc123")
    );
    assert_eq!(
        store.get_value(SessionDataKey::REFRESH_TOKEN).await.unwrap().as_deref(),
        Some("zyx987")
    );
    let user = store.get_value(SessionDataKey::USER).await.unwrap().unwrap();
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&user).unwrap(),
        json!({ "username": "alice", "email": "alice@example.org" })
    );
}

#[tokio::test]
async fn test_login_username_legacy_response() {
    let (client, server) = client_with_server().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&*test_json::LOGIN_LEGACY))
        .mount(&server)
        .await;

    client.auth().login_username("alice", "wordpass").await.unwrap();

    assert_eq!(client.user().unwrap().username, "alice");
    assert!(client.access_token().unwrap().starts_with("eyJ"));
    assert_eq!(client.session_store().refresh_token(), None);

    let store = client.session_store().key_value_store();
    assert_eq!(store.get_value(SessionDataKey::REFRESH_TOKEN).await.unwrap(), None);
}

#[tokio::test]
async fn test_login_username_invalid_credentials() {
    let (client, server) = client_with_server().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(&*test_json::INVALID_CREDENTIALS))
        .mount(&server)
        .await;

    let result = client.auth().login_username("alice", "wrong").await;

    assert_let!(Err(Error::Http(HttpError::Api { status, message })) = result);
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(message, "Invalid credentials");

    assert!(!client.logged_in());
    assert_eq!(client.session_store().state(), SessionState::Anonymous);
    assert!(client.session_store().key_value_store().keys().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_login_keeps_the_previous_session() {
    let (client, server) = logged_in_client_with_server().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(&*test_json::INVALID_CREDENTIALS))
        .mount(&server)
        .await;

    client.auth().login_username("bob", "wrong").await.unwrap_err();

    assert_eq!(client.user().unwrap().username, "alice");
    assert_eq!(client.access_token().as_deref(), Some("abc123"));
}

#[tokio::test]
async fn test_register() {
    let (client, server) = client_with_server().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({
            "username": "alice",
            "email": "alice@example.org",
            "password": "wordpass",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&*test_json::REGISTER))
        .expect(1)
        .mount(&server)
        .await;

    client.auth().register("alice", "alice@example.org", "wordpass").await.unwrap();

    // Registering doesn't log in.
    assert!(!client.logged_in());
}

#[tokio::test]
async fn test_register_taken_username() {
    let (client, server) = client_with_server().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(400).set_body_json(&*test_json::USER_ALREADY_EXISTS))
        .mount(&server)
        .await;

    let error =
        client.auth().register("alice", "alice@example.org", "wordpass").await.unwrap_err();

    assert_eq!(error.status_code(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(
        error.as_http_error().and_then(HttpError::api_message),
        Some("User already exists")
    );
}

#[tokio::test]
async fn test_register_openverse() {
    let (client, server) = client_with_server().await;

    Mock::given(method("POST"))
        .and(path("/register_openverse"))
        .and(body_json(json!({
            "name": "My media app",
            "description": "Searches openly licensed media",
            "email": "ops@example.org",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&*test_json::OPENVERSE_REGISTRATION))
        .expect(1)
        .mount(&server)
        .await;

    let data = client
        .auth()
        .register_openverse("My media app", "Searches openly licensed media", "ops@example.org")
        .await
        .unwrap();

    assert_eq!(data["client_id"], "pm8GMaIXIhkjQ4iDfXLOvVUUcIKGYRnMlZYApbda");
    assert_eq!(data["name"], "My media app");
}

#[tokio::test]
async fn test_register_openverse_invalid_email() {
    let (client, server) = client_with_server().await;

    Mock::given(method("POST"))
        .and(path("/register_openverse"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": "Invalid email" })))
        .mount(&server)
        .await;

    let error = client.auth().register_openverse("app", "desc", "nope").await.unwrap_err();

    assert_eq!(error.status_code(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(error.as_http_error().and_then(HttpError::api_message), Some("Invalid email"));
}

#[tokio::test]
async fn test_openverse_token() {
    let (client, server) = client_with_server().await;

    Mock::given(method("POST"))
        .and(path("/get_openverse_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&*test_json::OPENVERSE_TOKEN))
        .expect(1)
        .mount(&server)
        .await;

    let data = client.auth().openverse_token().await.unwrap();

    assert_eq!(data["access_token"], "DLBYIcfnKfolaXKcmMC8RIDCavc2hW");
    assert_eq!(data["expires_in"], 36000);
}

#[tokio::test]
async fn test_openverse_token_failure() {
    let (client, server) = client_with_server().await;

    Mock::given(method("POST"))
        .and(path("/get_openverse_token"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "error": "Authentication failed: invalid_client" })),
        )
        .mount(&server)
        .await;

    let error = client.auth().openverse_token().await.unwrap_err();

    assert_eq!(
        error.as_http_error().and_then(HttpError::api_message),
        Some("Authentication failed: invalid_client")
    );
}

#[tokio::test]
async fn test_requests_carry_the_access_token() {
    let (client, server) = client_with_server().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&*test_json::LOGIN))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&*test_json::CONTACTS))
        .expect(1)
        .mount(&server)
        .await;

    client.auth().login_username("alice", "wordpass").await.unwrap();
    client.contacts().list().await.unwrap();
}

#[tokio::test]
async fn test_logout() {
    let (client, server) = logged_in_client_with_server().await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&*test_json::CONTACTS))
        .mount(&server)
        .await;

    let mut changes = client.subscribe_to_session_changes();
    client.auth().logout().await.unwrap();

    assert_matches!(changes.try_recv(), Ok(SessionChange::LoggedOut));
    assert!(!client.logged_in());
    assert_eq!(client.user(), None);
    assert_eq!(client.session_store().refresh_token(), None);
    assert_eq!(client.access(), Access::RedirectToLogin);

    let store = client.session_store().key_value_store();
    for key in SessionDataKey::ALL {
        assert_eq!(store.get_value(key.as_str()).await.unwrap(), None);
    }

    // Logging out twice is fine.
    client.auth().logout().await.unwrap();

    client.contacts().list().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[cfg(feature = "json-store")]
#[tokio::test]
async fn test_session_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("storage.json");
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&*test_json::LOGIN))
        .mount(&server)
        .await;

    let client = Client::builder()
        .base_url(server.uri())
        .json_store_path(&store_path)
        .build()
        .await
        .unwrap();
    let response = client.auth().login_username("alice", "wordpass").await.unwrap();
    drop(client);

    let client = Client::builder()
        .base_url(server.uri())
        .json_store_path(&store_path)
        .build()
        .await
        .unwrap();

    assert_eq!(client.access(), Access::Granted);
    assert_eq!(client.user(), Some(response.user));
    assert_eq!(client.access_token().as_deref(), Some("abc123"));
    assert_eq!(client.session_store().refresh_token().as_deref(), Some("zyx987"));

    client.auth().logout().await.unwrap();
    drop(client);

    let client = Client::builder()
        .base_url(server.uri())
        .json_store_path(&store_path)
        .build()
        .await
        .unwrap();
    assert_eq!(client.access(), Access::RedirectToLogin);
    assert_eq!(client.user(), None);
}
