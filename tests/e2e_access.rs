use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use bendinledim::presentation::http::middleware::AccessPolicy;

mod support;

use support::{TestAppBuilder, admin_auth, basic_auth, get, send};

/// Protected API answers 503 with the CORS headers when no credentials are configured
#[tokio::test]
async fn protected_api_without_configured_credentials_returns_503() {
    let app = TestAppBuilder::new()
        .access(AccessPolicy::new(None, None))
        .build()
        .router();

    let request = Request::builder()
        .uri("/api/articles")
        .header(header::AUTHORIZATION, admin_auth())
        .body(Body::empty())
        .unwrap();
    let resp = send(&app, request).await;

    assert_eq!(resp.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(resp.text(), "ADMIN_USERNAME / ADMIN_PASSWORD is not configured");
    assert_eq!(resp.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");

    let resp = get(&app, "/admin").await;
    assert_eq!(resp.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(resp.text(), "Service unavailable");
}

/// Missing or wrong Basic credentials get a 401 challenge
#[tokio::test]
async fn protected_api_with_bad_credentials_returns_401_challenge() {
    let app = TestAppBuilder::new().build().router();

    let resp = get(&app, "/api/categories").await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.text(), "Authentication required");
    assert_eq!(
        resp.header(header::WWW_AUTHENTICATE),
        r#"Basic realm="Admin Panel", charset="UTF-8""#
    );
    assert_eq!(resp.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/assist")
        .header(header::AUTHORIZATION, basic_auth("editor", "wrong"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"action":"improve","text":"x"}"#))
        .unwrap();
    let resp = send(&app, request).await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);

    let resp = get(&app, "/admin").await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.text(), "Unauthorized");
}

/// Preflight requests are answered without credentials
#[tokio::test]
async fn preflight_on_protected_prefix_returns_204_with_cors() {
    let app = TestAppBuilder::new().build().router();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/articles/yeni-album")
        .body(Body::empty())
        .unwrap();
    let resp = send(&app, request).await;

    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    assert_eq!(resp.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    assert_eq!(
        resp.header(header::ACCESS_CONTROL_ALLOW_METHODS),
        "GET,POST,PUT,DELETE,OPTIONS"
    );
    assert_eq!(
        resp.header(header::ACCESS_CONTROL_ALLOW_HEADERS),
        "Authorization, Content-Type"
    );
}

/// Authorized responses on protected prefixes carry the CORS header set
#[tokio::test]
async fn authorized_protected_response_carries_cors_headers() {
    let app = TestAppBuilder::new().build().router();

    let request = Request::builder()
        .uri("/api/tags")
        .header(header::AUTHORIZATION, admin_auth())
        .body(Body::empty())
        .unwrap();
    let resp = send(&app, request).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    assert_eq!(resp.json(), serde_json::json!([]));
}

/// The dashboard is hidden in production unless explicitly enabled
#[tokio::test]
async fn admin_dashboard_is_hidden_in_production_without_flag() {
    let hidden = TestAppBuilder::new()
        .access(AccessPolicy::new(Some("editor"), Some("s3cret")).with_production(true))
        .build()
        .router();
    let request = Request::builder()
        .uri("/admin")
        .header(header::AUTHORIZATION, admin_auth())
        .body(Body::empty())
        .unwrap();
    let resp = send(&hidden, request).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.text(), "Not Found");

    let enabled = TestAppBuilder::new()
        .access(
            AccessPolicy::new(Some("editor"), Some("s3cret"))
                .with_production(true)
                .with_admin_dashboard(true),
        )
        .build()
        .router();
    let request = Request::builder()
        .uri("/admin")
        .header(header::AUTHORIZATION, admin_auth())
        .body(Body::empty())
        .unwrap();
    let resp = send(&enabled, request).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json()["totalArticles"], 0);
}

/// Public routes never ask for credentials
#[tokio::test]
async fn public_routes_are_open() {
    let app = TestAppBuilder::new()
        .access(AccessPolicy::new(None, None))
        .build()
        .router();

    for uri in ["/health", "/public/home", "/public/explore", "/api/rss", "/robots.txt"] {
        let resp = get(&app, uri).await;
        assert_eq!(resp.status, StatusCode::OK, "{uri}: {}", resp.text());
        assert!(resp.header(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_empty(), "{uri}");
    }

    let resp = get(&app, "/health").await;
    assert_eq!(resp.json()["status"], "ok");
}
