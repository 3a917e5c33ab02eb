use axum::http::{Method, StatusCode, header};
use serde_json::{Value, json};

mod support;

use support::{
    ArticleSeed, SITE, TestAppBuilder, admin_json, assert_error_response, get, post_json,
};

fn slugs(section: &Value) -> Vec<&str> {
    section
        .as_array()
        .unwrap()
        .iter()
        .map(|article| article["slug"].as_str().unwrap())
        .collect()
}

/// Sections avoid repeating an artist or an image shown above them
#[tokio::test]
async fn home_feed_is_curated_across_sections() {
    let app = TestAppBuilder::new().build();
    let news = app.category("Haber", "haber").await;
    app.article(
        ArticleSeed::new("Radiohead: Yeni Dönem", "radiohead-yeni-donem", &news)
            .featured()
            .image("https://img.test/hero.jpg"),
    )
    .await;
    app.article(
        ArticleSeed::new("Radiohead Turnesi Açıklandı", "radiohead-turnesi", &news)
            .image("https://img.test/r2.jpg")
            .minutes_ago(1),
    )
    .await;
    app.article(
        ArticleSeed::new("Mitski'nin Yeni Albümü", "mitski-yeni-album", &news)
            .image("https://img.test/hero.jpg?v=2")
            .minutes_ago(2),
    )
    .await;
    app.article(
        ArticleSeed::new("Wet Leg'den Single", "wet-leg-single", &news)
            .editors_pick()
            .image("https://img.test/w.jpg")
            .minutes_ago(3),
    )
    .await;
    app.article(
        ArticleSeed::new("Bon Iver Turnesi", "bon-iver-turnesi", &news)
            .featured()
            .editors_pick()
            .image("https://img.test/b.jpg")
            .minutes_ago(10),
    )
    .await;
    app.article(ArticleSeed::new("Gizli Taslak", "gizli-taslak", &news).draft().featured())
        .await;
    let router = app.router();

    let resp = get(&router, "/public/home").await;
    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.json();

    assert_eq!(body["hero"]["slug"], "radiohead-yeni-donem");
    assert_eq!(
        slugs(&body["latest"]),
        vec!["wet-leg-single", "mitski-yeni-album", "radiohead-turnesi"]
    );
    assert_eq!(slugs(&body["editorsPicks"]), vec!["bon-iver-turnesi"]);

    let structured = &body["structuredData"];
    assert_eq!(structured["@type"], "ItemList");
    assert_eq!(structured["itemListElement"].as_array().unwrap().len(), 4);
    assert_eq!(
        structured["itemListElement"][0]["item"]["url"],
        format!("{SITE}/haber/radiohead-yeni-donem")
    );
}

/// An empty site still renders an empty home page
#[tokio::test]
async fn home_feed_without_articles() {
    let app = TestAppBuilder::new().build();
    let body = get(&app.router(), "/public/home").await.json();

    assert!(body["hero"].is_null());
    assert_eq!(body["latest"], json!([]));
    assert_eq!(body["editorsPicks"], json!([]));
}

/// Article pages show only approved comments and hide drafts
#[tokio::test]
async fn article_page_shows_approved_comments_and_related() {
    let app = TestAppBuilder::new().build();
    let news = app.category("Haber", "haber").await;
    let main = app
        .article(ArticleSeed::new("Fleet Foxes'un Dönüşü", "fleet-foxes-donus", &news))
        .await;
    app.article(ArticleSeed::new("Fleet Foxes Turnesi", "fleet-foxes-turne", &news).minutes_ago(1))
        .await;
    app.article(ArticleSeed::new("Bon Iver Turnesi", "bon-iver-turnesi", &news).minutes_ago(2))
        .await;
    app.article(ArticleSeed::new("Taslak", "taslak", &news).draft()).await;
    let router = app.router();

    let approved = post_json(
        &router,
        "/api/comments",
        &json!({
            "articleId": main.id.0,
            "author": "Ece",
            "email": "ece@example.com",
            "content": "Onaylı"
        }),
    )
    .await
    .json();
    post_json(
        &router,
        "/api/comments",
        &json!({ "articleId": main.id.0, "author": "Can", "content": "Bekleyen" }),
    )
    .await;
    admin_json(
        &router,
        Method::PUT,
        &format!("/api/articles/fleet-foxes-donus/comments/{}", approved["id"]),
        &json!({ "approved": true }),
    )
    .await;

    let resp = get(&router, "/public/articles/fleet-foxes-donus").await;
    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.json();
    assert_eq!(body["article"]["slug"], "fleet-foxes-donus");
    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], "Onaylı");
    assert!(comments[0].get("email").is_none());
    assert_eq!(
        slugs(&body["related"]),
        vec!["bon-iver-turnesi", "fleet-foxes-turne"]
    );
    assert_eq!(body["structuredData"]["@type"], "NewsArticle");
    assert_eq!(body["structuredData"]["articleSection"], "Haber");

    let resp = get(&router, "/public/articles/taslak").await;
    assert_error_response(&resp, StatusCode::NOT_FOUND, "Not Found");
}

/// Category, tag, search and explore pages list published articles only
#[tokio::test]
async fn listing_pages() {
    let app = TestAppBuilder::new().build();
    let news = app.category("Haber", "haber").await;
    let review = app.category("İnceleme", "inceleme").await;
    let vinyl = app.tag("Vinil", "vinil").await;
    app.article(ArticleSeed::new("Plak Baskısı", "plak-baskisi", &news).tagged(&vinyl))
        .await;
    app.article(
        ArticleSeed::new("Albüm İncelemesi", "album-incelemesi", &review)
            .content("Gitarlar ön planda.")
            .minutes_ago(5),
    )
    .await;
    app.article(ArticleSeed::new("Plak Taslağı", "plak-taslagi", &news).draft().tagged(&vinyl))
        .await;
    let router = app.router();

    let body = get(&router, "/public/categories/haber").await.json();
    assert_eq!(body["category"]["slug"], "haber");
    assert_eq!(slugs(&body["articles"]), vec!["plak-baskisi"]);

    let resp = get(&router, "/public/categories/yok").await;
    assert_error_response(&resp, StatusCode::NOT_FOUND, "Not Found");

    let body = get(&router, "/public/tags/vinil").await.json();
    assert_eq!(body["tag"]["name"], "Vinil");
    assert_eq!(slugs(&body["articles"]), vec!["plak-baskisi"]);

    let body = get(&router, "/public/search?q=gitarlar").await.json();
    assert_eq!(body["query"], "gitarlar");
    assert_eq!(slugs(&body["articles"]), vec!["album-incelemesi"]);

    let body = get(&router, "/public/search?q=%20%20").await.json();
    assert_eq!(body["articles"], json!([]));

    let body = get(&router, "/public/explore").await.json();
    assert_eq!(
        slugs(&body["articles"]),
        vec!["plak-baskisi", "album-incelemesi"]
    );
    assert_eq!(body["categories"].as_array().unwrap().len(), 2);
}

/// Reader comments are stored pending and only for published articles
#[tokio::test]
async fn comment_submission() {
    let app = TestAppBuilder::new().build();
    let news = app.category("Haber", "haber").await;
    let live = app.article(ArticleSeed::new("Yayında", "yayinda", &news)).await;
    let draft = app.article(ArticleSeed::new("Taslak", "taslak", &news).draft()).await;
    let router = app.router();

    let resp = post_json(
        &router,
        "/api/comments",
        &json!({ "articleId": live.id.0, "author": "Ece", "content": "Harika bir yazı" }),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.json()["approved"], false);
    assert_eq!(resp.json()["articleId"], live.id.0);

    let resp = post_json(
        &router,
        "/api/comments",
        &json!({ "articleId": draft.id.0, "author": "Ece", "content": "Gizli" }),
    )
    .await;
    assert_error_response(&resp, StatusCode::NOT_FOUND, "Not Found");

    let resp = post_json(
        &router,
        "/api/comments",
        &json!({ "articleId": live.id.0, "author": " ", "content": "İsimsiz" }),
    )
    .await;
    assert_error_response(&resp, StatusCode::BAD_REQUEST, "Bad Request");

    assert_eq!(app.store.comments().len(), 1);
}

/// Syndication documents carry their content type and cache policy
#[tokio::test]
async fn rss_sitemap_and_robots() {
    let app = TestAppBuilder::new().build();
    let news = app.category("Haber", "haber").await;
    app.article(
        ArticleSeed::new("Yeni & Güzel", "yeni-guzel", &news).image("https://img.test/a.jpg"),
    )
    .await;
    app.article(ArticleSeed::new("Taslak", "taslak", &news).draft()).await;
    let router = app.router();

    let resp = get(&router, "/rss.xml").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header(header::CONTENT_TYPE), "application/rss+xml; charset=utf-8");
    assert_eq!(resp.header(header::CACHE_CONTROL), "public, max-age=0, s-maxage=600");
    let xml = resp.text();
    assert!(xml.contains("<title><![CDATA[Yeni & Güzel]]></title>"));
    assert!(xml.contains(&format!("<link>{SITE}/haber/yeni-guzel</link>")));
    assert!(!xml.contains("taslak"));

    let resp = get(&router, "/sitemap.xml").await;
    assert_eq!(resp.header(header::CONTENT_TYPE), "application/xml; charset=utf-8");
    assert_eq!(resp.header(header::CACHE_CONTROL), "public, max-age=0, s-maxage=3600");
    let xml = resp.text();
    assert!(xml.contains(&format!("<loc>{SITE}/kategori/haber</loc>")));
    assert!(xml.contains(&format!("<loc>{SITE}/haber/yeni-guzel</loc>")));
    assert!(!xml.contains("/haber/taslak"));

    let resp = get(&router, "/robots.txt").await;
    assert_eq!(resp.header(header::CONTENT_TYPE), "text/plain; charset=utf-8");
    assert_eq!(resp.header(header::CACHE_CONTROL), "public, max-age=0, s-maxage=86400");
    assert_eq!(
        resp.text(),
        format!("User-agent: *\nAllow: /\nSitemap: {SITE}/sitemap.xml\n")
    );
}

/// The OpenAPI document is served alongside the interactive docs
#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestAppBuilder::new().build();
    let resp = get(&app.router(), "/openapi.json").await;

    assert_eq!(resp.status, StatusCode::OK);
    let doc = resp.json();
    assert_eq!(doc["info"]["title"], "Ben Dinledim API");
    assert!(doc["paths"]["/api/articles/{slug}"].is_object());
    assert!(doc["components"]["securitySchemes"]["basicAuth"].is_object());
}
