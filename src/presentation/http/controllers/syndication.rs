use crate::application::{
    dto::{ArticleDto, FeedListingDto, TranslatedItemDto},
    syndication::ImportFeedItemCommand,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiJson;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedQuery {
    /// Source name, matched case-insensitively.
    pub source: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TranslateItemRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportItemRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category_id: i64,
}

impl From<ImportItemRequest> for ImportFeedItemCommand {
    fn from(request: ImportItemRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            link: request.link,
            source: request.source,
            image_url: request.image_url,
            category_id: request.category_id,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/rss",
    params(FeedQuery),
    responses((status = 200, description = "Items from the reachable sources, newest first.", body = FeedListingDto)),
    tag = "Syndication"
)]
pub async fn list_feed_items(
    Extension(state): Extension<HttpState>,
    Query(query): Query<FeedQuery>,
) -> Json<FeedListingDto> {
    Json(state.services.syndication.list(query.source.as_deref()).await)
}

#[utoipa::path(
    post,
    path = "/api/rss/translate",
    request_body = TranslateItemRequest,
    responses(
        (status = 200, description = "Turkish title and description.", body = TranslatedItemDto),
        (status = 400, description = "Missing title.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Model unavailable or reply without JSON.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Syndication"
)]
pub async fn translate_item(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<TranslateItemRequest>,
) -> HttpResult<Json<TranslatedItemDto>> {
    state
        .services
        .syndication
        .translate_item(&payload.title, &payload.description)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/rss/import",
    request_body = ImportItemRequest,
    responses(
        (status = 201, description = "Item translated and saved as a draft.", body = ArticleDto),
        (status = 400, description = "Missing title or unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Syndication"
)]
pub async fn import_item(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<ImportItemRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let article = state
        .services
        .syndication
        .import_item(payload.into())
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}
