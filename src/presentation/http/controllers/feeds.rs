use crate::application::publishing::{
    ROBOTS_CACHE_CONTROL, ROBOTS_CONTENT_TYPE, RSS_CACHE_CONTROL, RSS_CONTENT_TYPE,
    SITEMAP_CACHE_CONTROL, SITEMAP_CONTENT_TYPE,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    http::header,
    response::{IntoResponse, Response},
};

fn document(content_type: &'static str, cache_control: &'static str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, cache_control),
        ],
        body,
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/rss.xml",
    responses((status = 200, description = "RSS 2.0 channel of the newest published articles.", content_type = "application/rss+xml")),
    tag = "Feeds"
)]
pub async fn rss(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let now = state.services.clock().now();
    let body = state.services.publishing.rss(now).await.into_http()?;
    Ok(document(RSS_CONTENT_TYPE, RSS_CACHE_CONTROL, body))
}

#[utoipa::path(
    get,
    path = "/sitemap.xml",
    responses((status = 200, description = "Sitemap of static pages, categories and published articles.", content_type = "application/xml")),
    tag = "Feeds"
)]
pub async fn sitemap(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let body = state.services.publishing.sitemap().await.into_http()?;
    Ok(document(SITEMAP_CONTENT_TYPE, SITEMAP_CACHE_CONTROL, body))
}

#[utoipa::path(
    get,
    path = "/robots.txt",
    responses((status = 200, description = "Crawler rules with the sitemap location.", content_type = "text/plain")),
    tag = "Feeds"
)]
pub async fn robots(Extension(state): Extension<HttpState>) -> Response {
    document(
        ROBOTS_CONTENT_TYPE,
        ROBOTS_CACHE_CONTROL,
        state.services.publishing.robots(),
    )
}
