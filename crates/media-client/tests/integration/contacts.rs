use media_client::{
    contacts::{Contact, ContactUpdate, NewContact},
    reqwest::StatusCode,
};
use media_client_test::test_json;
use serde_json::json;
use similar_asserts::assert_eq;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, ResponseTemplate,
};

use crate::client_with_server;

#[tokio::test]
async fn test_list_contacts() {
    let (client, server) = client_with_server().await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&*test_json::CONTACTS))
        .expect(1)
        .mount(&server)
        .await;

    let contacts = client.contacts().list().await.unwrap();

    assert_eq!(
        contacts,
        vec![
            Contact {
                id: 1,
                first_name: "Ada".to_owned(),
                last_name: "Lovelace".to_owned(),
                email: "ada@example.org".to_owned(),
            },
            Contact {
                id: 2,
                first_name: "Alan".to_owned(),
                last_name: "Turing".to_owned(),
                email: "alan@example.org".to_owned(),
            },
        ]
    );
}

#[tokio::test]
async fn test_create_contact() {
    let (client, server) = client_with_server().await;

    Mock::given(method("POST"))
        .and(path("/create_contact"))
        .and(body_json(json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.org",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&*test_json::CREATED))
        .expect(1)
        .mount(&server)
        .await;

    let contact = NewContact::new("Grace", "Hopper", "grace@example.org");
    client.contacts().create(&contact).await.unwrap();
}

#[tokio::test]
async fn test_update_contact() {
    let (client, server) = client_with_server().await;

    Mock::given(method("PATCH"))
        .and(path("/update_contact/2"))
        .and(body_json(json!({ "email": "alan@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "User updated" })))
        .expect(1)
        .mount(&server)
        .await;

    let update = ContactUpdate { email: Some("alan@example.com".to_owned()), ..Default::default() };
    client.contacts().update(2, &update).await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_contact() {
    let (client, server) = client_with_server().await;

    Mock::given(method("DELETE"))
        .and(path("/delete_contact/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(&*test_json::NOT_FOUND))
        .expect(1)
        .mount(&server)
        .await;

    let error = client.contacts().delete(42).await.unwrap_err();

    assert_eq!(error.status_code(), Some(StatusCode::NOT_FOUND));
    assert_eq!(error.to_string(), "the server returned an error (404 Not Found): User not found");
}
