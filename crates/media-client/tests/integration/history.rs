use assert_matches::assert_matches;
use media_client::{history::HistoryEntry, Error};
use media_client_test::test_json;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, ResponseTemplate,
};

use crate::{client_with_server, logged_in_client_with_server};

#[tokio::test]
async fn test_list_history() {
    let (client, server) = logged_in_client_with_server().await;

    Mock::given(method("GET"))
        .and(path("/search_history"))
        .and(query_param("username", "alice"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&*test_json::SEARCH_HISTORY))
        .expect(1)
        .mount(&server)
        .await;

    let history = client.history().list().await.unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(
        history[0],
        HistoryEntry {
            id: 7,
            query: "birdsong".to_owned(),
            timestamp: "2026-10-01T09:30:00".to_owned(),
        }
    );
    assert_eq!(history[1].query, "thunderstorm");
}

#[tokio::test]
async fn test_save_search() {
    let (client, server) = logged_in_client_with_server().await;

    Mock::given(method("POST"))
        .and(path("/search_history"))
        .and(body_json(json!({ "username": "alice", "query": "owls" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "Search saved" })))
        .expect(1)
        .mount(&server)
        .await;

    client.history().save("owls").await.unwrap();
}

#[tokio::test]
async fn test_delete_search() {
    let (client, server) = logged_in_client_with_server().await;

    Mock::given(method("DELETE"))
        .and(path("/search_history/7"))
        .and(query_param("username", "alice"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Search deleted" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    client.history().delete(7).await.unwrap();
}

#[tokio::test]
async fn test_history_needs_a_user() {
    let (client, server) = client_with_server().await;

    Mock::given(method("GET"))
        .and(path("/search_history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&*test_json::SEARCH_HISTORY))
        .expect(0)
        .mount(&server)
        .await;

    assert_matches!(client.history().list().await, Err(Error::AuthenticationRequired));
}

#[tokio::test]
async fn test_history_after_logout() {
    let (client, server) = logged_in_client_with_server().await;

    Mock::given(method("POST"))
        .and(path("/search_history"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "Search saved" })))
        .expect(1)
        .mount(&server)
        .await;

    client.history().save("owls").await.unwrap();
    client.auth().logout().await.unwrap();

    assert_matches!(client.history().save("bats").await, Err(Error::AuthenticationRequired));
}
