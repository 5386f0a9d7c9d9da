// Status contract and error surfacing against a wiremock admin API.
#![allow(clippy::unwrap_used)]

use std::time::Duration;

use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kong_api::{Error, KongClient, NewService};

async fn setup() -> (MockServer, KongClient) {
    let server = MockServer::start().await;
    let client = KongClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn unexpected(err: Error) -> (u16, String, Method, String) {
    match err {
        Error::UnexpectedStatus {
            status,
            body,
            method,
            url,
        } => (status, body, method, url),
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_set_healthy_target_succeeds_on_204() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/upstreams/up1/targets/t1/healthy"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .targets()
        .set_healthy_target_by_upstream("up1", "t1")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_healthy_target_404_reports_method_and_url() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/upstreams/up1/targets/t1/healthy"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"message":"Not found"}"#))
        .mount(&server)
        .await;

    let err = client
        .targets()
        .set_healthy_target_by_upstream("up1", "t1")
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let (status, body, method, url) = unexpected(err);
    assert_eq!(status, 404);
    assert_eq!(body, r#"{"message":"Not found"}"#);
    assert_eq!(method, Method::POST);
    assert_eq!(url, format!("{}/upstreams/up1/targets/t1/healthy", server.uri()));
}

#[tokio::test]
async fn test_list_requires_200() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/routes"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client.routes().list(None).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("boom (Http 500) (Method GET) (Url {}/routes)", server.uri())
    );
}

#[tokio::test]
async fn test_create_requires_201_even_on_200() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "s1" })))
        .mount(&server)
        .await;

    let err = client
        .services()
        .create(&NewService::new("svc"))
        .await
        .unwrap_err();
    let (status, _, method, _) = unexpected(err);
    assert_eq!(status, 200);
    assert_eq!(method, Method::POST);
}

#[tokio::test]
async fn test_create_conflict_is_flagged() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "UNIQUE violation detected on '{name=\"svc\"}'",
            "name": "unique constraint violation",
            "code": 5,
        })))
        .mount(&server)
        .await;

    let err = client
        .services()
        .create(&NewService::new("svc"))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(err.status(), Some(409));
}

#[tokio::test]
async fn test_delete_requires_204_and_renders_default_message() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/consumers/c1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = client.consumers().delete("c1").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "An unexpected error occurred (Http 200) (Method DELETE) (Url {}/consumers/c1)",
            server.uri()
        )
    );
}

#[tokio::test]
async fn test_list_without_data_key_is_a_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/upstreams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let err = client.upstreams().list(None).await.unwrap_err();
    match err {
        Error::Decode { body, .. } => assert_eq!(body, r#"{"items":[]}"#),
        other => panic!("expected Decode, got {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_surfaces_as_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let client = KongClient::from_reqwest(&server.uri(), http).unwrap();

    let err = client.info().get_node_status().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.is_transient());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_base_path_prefix_is_preserved() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/kong-admin/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = KongClient::from_reqwest(
        &format!("{}/kong-admin/", server.uri()),
        reqwest::Client::new(),
    )
    .unwrap();
    assert!(client.tags().list().await.unwrap().is_empty());
}
