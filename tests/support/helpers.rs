// tests/support/helpers.rs
use axum::Router;
use axum::body::{self, Body};
use axum::http::{HeaderMap, HeaderValue, Method, Request, StatusCode, header};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::builders::{ADMIN_PASSWORD, ADMIN_USER};

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|err| {
            panic!(
                "expected JSON body ({err}), got: {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn header(&self, name: header::HeaderName) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }
}

pub fn basic_auth(user: &str, password: &str) -> HeaderValue {
    let token = STANDARD.encode(format!("{user}:{password}"));
    HeaderValue::from_str(&format!("Basic {token}")).unwrap()
}

pub fn admin_auth() -> HeaderValue {
    basic_auth(ADMIN_USER, ADMIN_PASSWORD)
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let (parts, body_stream) = response.into_parts();
    let body = body::to_bytes(body_stream, 4 * 1024 * 1024)
        .await
        .expect("read body")
        .to_vec();
    TestResponse {
        status: parts.status,
        headers: parts.headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn admin_get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, admin_auth())
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn admin_json(app: &Router, method: Method, uri: &str, payload: &Value) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, admin_auth())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, payload: &Value) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(app, request).await
}

/// Asserts the JSON error envelope: status, reason phrase and a message.
pub fn assert_error_response(
    resp: &TestResponse,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status, expected_status, "body: {}", resp.text());
    let ct = resp.header(header::CONTENT_TYPE);
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = resp.json();
    assert_eq!(json["error"].as_str().unwrap_or(""), expected_error);
    assert!(
        !json["message"].as_str().unwrap_or("").is_empty(),
        "expected non-empty message field"
    );
}
