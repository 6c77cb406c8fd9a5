use std::time::{Duration, Instant};

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, MockConfig};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn api_request(query: &str) -> Request<String> {
    Request::builder()
        .uri(format!("/api/?{query}"))
        .header(http::header::USER_AGENT, "mock-tests")
        .body(String::new())
        .unwrap()
}

// --- happy path ---

#[tokio::test]
async fn legislators_returns_fixture() {
    let resp = app(MockConfig::default())
        .oneshot(api_request("method=getLegislators&output=json&apikey=test-key&id=TX"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[http::header::CONTENT_TYPE],
        "application/json"
    );
    let body = body_json(resp).await;
    assert_eq!(body["response"]["legislator"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn committee_requires_both_codes() {
    let resp = app(MockConfig::default())
        .oneshot(api_request(
            "method=congCmteIndus&output=json&apikey=test-key&cmte=HARM&indus=F10&congno=116",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["response"]["committee"]["@attributes"]["committee_name"], "HARM");
}

#[tokio::test]
async fn independent_expenditures_needs_no_params() {
    let resp = app(MockConfig::default())
        .oneshot(api_request("method=independentExpend&output=json&apikey=test-key"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// --- rejections ---

#[tokio::test]
async fn missing_user_agent_is_forbidden() {
    let resp = app(MockConfig::default())
        .oneshot(
            Request::builder()
                .uri("/api/?method=getLegislators&output=json&apikey=test-key&id=TX")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn blank_user_agent_is_forbidden() {
    let resp = app(MockConfig::default())
        .oneshot(
            Request::builder()
                .uri("/api/?method=getLegislators&output=json&apikey=test-key&id=TX")
                .header(http::header::USER_AGENT, "  ")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn wrong_api_key_is_unauthorized() {
    let resp = app(MockConfig::default())
        .oneshot(api_request("method=getLegislators&output=json&apikey=nope&id=TX"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_json_output_is_rejected() {
    let resp = app(MockConfig::default())
        .oneshot(api_request("method=getLegislators&output=xml&apikey=test-key&id=TX"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_method_is_rejected() {
    let resp = app(MockConfig::default())
        .oneshot(api_request("method=getEverything&output=json&apikey=test-key"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_bytes(resp).await, "Unknown method");
}

#[tokio::test]
async fn missing_required_param_is_rejected() {
    let resp = app(MockConfig::default())
        .oneshot(api_request("method=candIndByInd&output=json&apikey=test-key&cid=N00007360"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_bytes(resp).await, "Missing parameter: ind");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let resp = app(MockConfig::default())
        .oneshot(
            Request::builder()
                .uri("/v2/members")
                .header(http::header::USER_AGENT, "mock-tests")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- latency ---

#[tokio::test]
async fn latency_delays_response() {
    let config = MockConfig {
        latency: Duration::from_millis(50),
        ..MockConfig::default()
    };
    let started = Instant::now();
    let resp = app(config)
        .oneshot(api_request("method=independentExpend&output=json&apikey=test-key"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(50));
}
