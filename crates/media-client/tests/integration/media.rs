use assert_matches2::assert_let;
use media_client::{
    media::{AudioSearch, ImageSearch},
    reqwest::StatusCode,
    Error, HttpError,
};
use media_client_test::test_json;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param, query_param_is_missing},
    Mock, ResponseTemplate,
};

use crate::{client_with_server, logged_in_client_with_server};

#[tokio::test]
async fn test_search_images() {
    let (client, server) = client_with_server().await;

    Mock::given(method("GET"))
        .and(path("/search_images"))
        .and(query_param("q", "owl"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "12"))
        .and(query_param_is_missing("license"))
        .and(query_param_is_missing("tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&*test_json::IMAGE_SEARCH))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.search().images(ImageSearch::new(" owl ").page_size(12)).await.unwrap();

    assert_eq!(response.result_count, 240);
    assert_eq!(response.page, 1);
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].title.as_deref(), Some("Tawny owl"));
    assert_eq!(response.results[0].extra["license_version"], "2.0");
}

#[tokio::test]
async fn test_search_images_with_filters() {
    let (client, server) = client_with_server().await;

    Mock::given(method("GET"))
        .and(path("/search_images"))
        .and(query_param("q", "owl"))
        .and(query_param("page", "3"))
        .and(query_param("page_size", "20"))
        .and(query_param("license", "by,cc0"))
        .and(query_param("creator", "Rob Lee"))
        .and(query_param("tags", "bird,night"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&*test_json::IMAGE_SEARCH))
        .expect(1)
        .mount(&server)
        .await;

    let search = ImageSearch::new("owl")
        .page(3)
        .license("by")
        .license("cc0")
        .creator("Rob Lee")
        .tags(["bird", "night"]);
    client.search().images(search).await.unwrap();
}

#[tokio::test]
async fn test_search_audio() {
    let (client, server) = logged_in_client_with_server().await;

    Mock::given(method("GET"))
        .and(path("/search_audio"))
        .and(query_param("q", "blackbird"))
        .and(query_param("license", "by"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&*test_json::AUDIO_SEARCH))
        .expect(1)
        .mount(&server)
        .await;

    let response =
        client.search().audio(AudioSearch::new("blackbird").license("by")).await.unwrap();

    assert_eq!(response.results[0].id, "8624ba61-57f1-4f98-8a85-ece206c319cf");
    assert_eq!(response.results[0].extra["duration"], 61500);
}

#[tokio::test]
async fn test_search_error() {
    let (client, server) = client_with_server().await;

    Mock::given(method("GET"))
        .and(path("/search_images"))
        .respond_with(ResponseTemplate::new(400).set_body_json(&*test_json::SEARCH_ERROR))
        .mount(&server)
        .await;

    let result = client.search().images(ImageSearch::new("owl")).await;

    assert_let!(Err(Error::Http(HttpError::Api { status, message })) = result);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message, "Rate limit exceeded");
}

#[tokio::test]
async fn test_image_detail() {
    let (client, server) = client_with_server().await;

    Mock::given(method("GET"))
        .and(path("/image_detail/4bc43a04-ef46-4544-a0c1-63c63f56e276"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&*test_json::IMAGE_DETAIL))
        .expect(1)
        .mount(&server)
        .await;

    let image =
        client.search().image_detail("4bc43a04-ef46-4544-a0c1-63c63f56e276").await.unwrap();

    assert_eq!(image.creator.as_deref(), Some("Rob Lee"));
    assert_eq!(image.thumbnail, None);
    assert_eq!(image.extra["width"], 500);
}

#[tokio::test]
async fn test_audio_detail_not_found() {
    let (client, server) = client_with_server().await;

    Mock::given(method("GET"))
        .and(path("/audio_detail/missing"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "Not found" })))
        .mount(&server)
        .await;

    let error = client.search().audio_detail("missing").await.unwrap_err();
    assert_eq!(error.status_code(), Some(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn test_catalog_stats() {
    let (client, server) = client_with_server().await;

    Mock::given(method("GET"))
        .and(path("/rate_limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&*test_json::RATE_LIMIT))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/image_stats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "source_name": "flickr", "media_count": 500 }])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/audio_stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let rate_limit = client.search().rate_limit().await.unwrap();
    assert_eq!(rate_limit["requests_today"], 42);

    let image_stats = client.search().image_stats().await.unwrap();
    assert_eq!(image_stats[0]["source_name"], "flickr");

    let audio_stats = client.search().audio_stats().await.unwrap();
    assert_eq!(audio_stats, json!([]));
}
