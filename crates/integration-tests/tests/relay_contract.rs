//! The relay's HTTP contract, exercised over real sockets.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use reqwest::StatusCode;
use storefront_relay_core::GraphQLRequest;
use storefront_relay_integration_tests::{TEST_TOKEN, spawn_relay};
use wiremock::matchers::{body_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUERY: &str = "{ shop { name } }";

async fn post(relay_url: &str, body: String) -> reqwest::Response {
    reqwest::Client::new()
        .post(relay_url)
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .unwrap()
}

fn query_body() -> String {
    serde_json::to_string(&GraphQLRequest::new(QUERY)).unwrap()
}

#[tokio::test]
async fn test_round_trip_carries_token_and_returns_body() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("X-Shopify-Storefront-Access-Token", TEST_TOKEN))
        .and(body_json(serde_json::json!({ "query": QUERY })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": { "shop": { "name": "Naked Pineapple" } } })),
        )
        .expect(1)
        .mount(&upstream)
        .await;

    let relay = spawn_relay(&upstream.uri(), true).await;
    let response = post(&relay, query_body()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["shop"]["name"], "Naked Pineapple");
}

#[tokio::test]
async fn test_get_is_rejected() {
    let upstream = MockServer::start().await;
    let relay = spawn_relay(&upstream.uri(), true).await;

    let response = reqwest::get(&relay).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Only POST requests allowed");
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_preflight() {
    let upstream = MockServer::start().await;
    let relay = spawn_relay(&upstream.uri(), true).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, &relay)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-methods"],
        "POST, OPTIONS"
    );
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unconfigured_relay_names_missing_variables() {
    let upstream = MockServer::start().await;
    let relay = spawn_relay(&upstream.uri(), false).await;

    let response = post(&relay, query_body()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["error"],
        "Missing configuration: SHOPIFY_STORE, SHOPIFY_STOREFRONT_ACCESS_TOKEN"
    );
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": {} })))
        .expect(8)
        .mount(&upstream)
        .await;

    let relay = spawn_relay(&upstream.uri(), true).await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let relay = relay.clone();
        handles.push(tokio::spawn(async move {
            post(&relay, query_body()).await.status()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }
}
