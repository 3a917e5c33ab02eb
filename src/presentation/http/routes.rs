// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{
        admin, articles, assist, comments, feeds, generation, public, syndication, taxonomy,
    },
    middleware::{access_guard, rate_limit::api_rate_limit_layer},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router, middleware,
    routing::{get, post, put},
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Full application router. Tests pass `rate_limit = false` because the
/// limiter keys on the peer address, which `oneshot` requests lack.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    let mut api = api_routes();
    if let Some(layer) = rate_limit.then(api_rate_limit_layer).flatten() {
        api = api.layer(layer);
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(public_routes())
        .merge(api)
        .route("/admin", get(admin::dashboard))
        .layer(middleware::from_fn(access_guard))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

fn public_routes() -> Router {
    Router::new()
        .route("/public/home", get(public::home))
        .route("/public/articles/{slug}", get(public::article))
        .route("/public/categories/{slug}", get(public::category))
        .route("/public/tags/{slug}", get(public::tag))
        .route("/public/search", get(public::search))
        .route("/public/explore", get(public::explore))
        .route("/rss.xml", get(feeds::rss))
        .route("/sitemap.xml", get(feeds::sitemap))
        .route("/robots.txt", get(feeds::robots))
}

fn api_routes() -> Router {
    Router::new()
        .route("/api/comments", post(comments::create_comment))
        .route("/api/rss", get(syndication::list_feed_items))
        .route("/api/rss/translate", post(syndication::translate_item))
        .route("/api/rss/import", post(syndication::import_item))
        .route(
            "/api/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/articles/{slug}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/articles/{slug}/comments",
            get(articles::list_article_comments),
        )
        .route(
            "/api/articles/{slug}/comments/{id}",
            put(articles::moderate_comment),
        )
        .route("/api/categories", get(taxonomy::list_categories))
        .route("/api/tags", get(taxonomy::list_tags))
        .route("/api/bootstrap", post(taxonomy::bootstrap))
        .route(
            "/api/ai-generate",
            get(generation::recent_articles).post(generation::generate_articles),
        )
        .route("/api/ai/draft", post(generation::draft_article))
        .route("/api/assist", post(assist::assist))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
