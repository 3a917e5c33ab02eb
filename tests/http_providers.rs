use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bendinledim::application::{
    ApplicationError,
    ports::{
        feeds::{FeedReader, FeedSource},
        language_model::{CompletionRequest, LanguageModel},
        media::MediaSearch,
    },
};
use bendinledim::infrastructure::providers::{
    CommonsMediaSearch, GeminiModel, HttpFeedReader, OpenAiChatModel,
};
use serde_json::{Value, json};

type Captured = Arc<Mutex<Vec<(HeaderMap, Value)>>>;

/// Serves `router` on an ephemeral local port and returns its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn chat_completions(
    State(captured): State<Captured>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let model = body["model"].as_str().unwrap_or_default().to_string();
    captured.lock().unwrap().push((headers, body));
    match model.as_str() {
        "broken" => (StatusCode::TOO_MANY_REQUESTS, "quota exceeded").into_response(),
        "silent" => Json(json!({ "choices": [] })).into_response(),
        _ => Json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Yeni albüm çıktı." } }]
        }))
        .into_response(),
    }
}

async fn openai_stub() -> (String, Captured) {
    let captured = Captured::default();
    let router = Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(Arc::clone(&captured));
    let base = serve(router).await;
    (format!("{base}/v1/chat/completions"), captured)
}

#[tokio::test]
async fn openai_sends_system_and_user_messages() {
    let (endpoint, captured) = openai_stub().await;
    let model = OpenAiChatModel::new(Some("sk-test".into()), "gpt-4o-mini")
        .unwrap()
        .with_endpoint(endpoint);

    let reply = model
        .complete(
            CompletionRequest::new("Haber yaz")
                .with_system("Sen bir müzik editörüsün.")
                .with_max_tokens(300),
        )
        .await
        .unwrap();

    assert_eq!(reply, "Yeni albüm çıktı.");
    let captured = captured.lock().unwrap();
    let (headers, body) = &captured[0];
    assert_eq!(headers[header::AUTHORIZATION], "Bearer sk-test");
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["max_tokens"], 300);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "Haber yaz");
}

#[tokio::test]
async fn openai_error_status_keeps_the_body() {
    let (endpoint, _) = openai_stub().await;
    let model = OpenAiChatModel::new(Some("sk-test".into()), "broken")
        .unwrap()
        .with_endpoint(endpoint);

    let err = model.complete(CompletionRequest::new("x")).await.unwrap_err();

    match err {
        ApplicationError::Upstream { message, details } => {
            assert!(message.contains("429"), "{message}");
            assert_eq!(details, "quota exceeded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn openai_without_choices_is_malformed() {
    let (endpoint, _) = openai_stub().await;
    let model = OpenAiChatModel::new(Some("sk-test".into()), "silent")
        .unwrap()
        .with_endpoint(endpoint);

    let err = model.complete(CompletionRequest::new("x")).await.unwrap_err();

    assert!(matches!(err, ApplicationError::MalformedResponse { .. }), "{err:?}");
}

async fn generate_content(
    State(captured): State<Captured>,
    Path(call): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    captured
        .lock()
        .unwrap()
        .push((headers, json!({ "call": call, "body": body })));
    Json(json!({
        "candidates": [{
            "content": { "parts": [{ "text": "The new " }, { "text": "album is out." }] }
        }]
    }))
}

#[tokio::test]
async fn gemini_posts_to_the_model_endpoint() {
    let captured = Captured::default();
    let router = Router::new()
        .route("/models/{call}", post(generate_content))
        .with_state(Arc::clone(&captured));
    let base = serve(router).await;
    let model = GeminiModel::new(Some("g-key".into()), "gemini-2.5-flash")
        .unwrap()
        .with_base_url(format!("{base}/models"));

    let reply = model
        .complete(CompletionRequest::new("Çevir").with_temperature(0.2))
        .await
        .unwrap();

    assert_eq!(reply, "The new album is out.");
    let captured = captured.lock().unwrap();
    let (headers, seen) = &captured[0];
    assert_eq!(headers["x-goog-api-key"], "g-key");
    assert_eq!(seen["call"], "gemini-2.5-flash:generateContent");
    assert_eq!(seen["body"]["contents"][0]["parts"][0]["text"], "Çevir");
    assert!(seen["body"].get("systemInstruction").is_none());
    assert!(seen["body"]["generationConfig"]["maxOutputTokens"].is_number());
}

async fn commons_api(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    if params.get("list").map(String::as_str) == Some("search") {
        assert_eq!(params.get("srnamespace").map(String::as_str), Some("6"));
        return Json(json!({
            "query": { "search": [
                { "pageid": 7, "title": "File:Wet Leg 2022.jpg" },
                { "pageid": 9, "title": "File:Wet Leg logo.svg" }
            ] }
        }));
    }
    assert_eq!(params.get("pageids").map(String::as_str), Some("7|9"));
    Json(json!({
        "query": { "pages": {
            "7": { "pageid": 7, "title": "File:Wet Leg 2022.jpg", "imageinfo": [{
                "url": "https://upload.example/WetLeg.jpg",
                "thumburl": "https://upload.example/1400px-WetLeg.jpg",
                "mime": "image/jpeg"
            }] },
            "9": { "pageid": 9, "title": "File:Wet Leg logo.svg", "imageinfo": [{
                "url": "https://upload.example/logo.svg",
                "mime": "image/svg+xml"
            }] }
        } }
    }))
}

#[tokio::test]
async fn commons_search_then_describe() {
    let base = serve(Router::new().route("/w/api.php", get(commons_api))).await;
    let commons = CommonsMediaSearch::new()
        .unwrap()
        .with_endpoint(format!("{base}/w/api.php"));

    let hits = commons.search("Wet Leg", 5).await.unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].page_id, 7);

    let ids: Vec<u64> = hits.iter().map(|hit| hit.page_id).collect();
    let mut infos = commons.describe(&ids).await.unwrap();
    infos.sort_by_key(|info| info.page_id);

    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].mime.as_deref(), Some("image/jpeg"));
    assert_eq!(
        infos[0].thumb_url.as_deref(),
        Some("https://upload.example/1400px-WetLeg.jpg")
    );
    assert_eq!(infos[1].thumb_url, None);
    assert!(commons.describe(&[]).await.unwrap().is_empty());
}

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Stub</title>
    <item>
      <title>Fontaines D.C. share new single</title>
      <link>https://example.com/fontaines</link>
      <description>Out now.</description>
      <pubDate>Wed, 06 Mar 2024 08:00:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

fn source(name: &'static str, url: String) -> FeedSource {
    FeedSource {
        name,
        url: Box::leak(url.into_boxed_str()),
    }
}

#[tokio::test]
async fn feed_reader_parses_served_documents() {
    let router = Router::new()
        .route("/feed", get(|| async { ([(header::CONTENT_TYPE, "application/rss+xml")], FEED) }))
        .route("/gone", get(|| async { StatusCode::NOT_FOUND }));
    let base = serve(router).await;
    let reader = HttpFeedReader::new().unwrap();

    let items = reader.fetch(&source("Stub", format!("{base}/feed"))).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Fontaines D.C. share new single");
    assert_eq!(items[0].source, "Stub");
    assert!(items[0].published_at.is_some());

    let err = reader
        .fetch(&source("Gone", format!("{base}/gone")))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Upstream { .. }), "{err:?}");
}
