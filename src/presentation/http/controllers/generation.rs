use crate::application::{
    dto::{ArticleDraftDto, ArticleDto, GenerationReportDto},
    generation::{DEFAULT_DRAFT_COUNT, GenerateArticlesCommand},
    queries::articles::ListArticlesQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiJson;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, body::Bytes, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const RECENT_LIMIT: u32 = 20;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub count: Option<u32>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub editors_pick: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentArticlesResponse {
    pub articles: Vec<ArticleDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DraftRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DraftResponse {
    pub article: ArticleDraftDto,
}

/// An empty body means every option takes its default.
fn parse_optional_body(body: &[u8]) -> HttpResult<GenerateRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GenerateRequest::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        HttpError::new(
            StatusCode::BAD_REQUEST,
            format!("invalid request body: {err}"),
        )
    })
}

#[utoipa::path(
    post,
    path = "/api/ai-generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Drafts generated and saved as published articles.", body = GenerationReportDto),
        (status = 500, description = "Model unavailable or unusable output.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Generation"
)]
pub async fn generate_articles(
    Extension(state): Extension<HttpState>,
    body: Bytes,
) -> HttpResult<Json<GenerationReportDto>> {
    let request = parse_optional_body(&body)?;
    let command = GenerateArticlesCommand {
        count: request.count.unwrap_or(DEFAULT_DRAFT_COUNT),
        featured: request.featured,
        editors_pick: request.editors_pick,
    };
    state
        .services
        .generation
        .generate(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/ai-generate",
    responses((status = 200, description = "The 20 most recently created articles.", body = RecentArticlesResponse)),
    security(("basicAuth" = [])),
    tag = "Generation"
)]
pub async fn recent_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<RecentArticlesResponse>> {
    let page = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            all: true,
            page: 1,
            limit: RECENT_LIMIT,
            ..ListArticlesQuery::default()
        })
        .await
        .into_http()?;
    Ok(Json(RecentArticlesResponse {
        articles: page.articles,
    }))
}

#[utoipa::path(
    post,
    path = "/api/ai/draft",
    request_body = DraftRequest,
    responses(
        (status = 200, description = "Unsaved article draft.", body = DraftResponse),
        (status = 400, description = "Missing prompt.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Generation"
)]
pub async fn draft_article(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<DraftRequest>,
) -> HttpResult<Json<DraftResponse>> {
    let article = state
        .services
        .generation
        .draft_article(&payload.prompt)
        .await
        .into_http()?;
    Ok(Json(DraftResponse { article }))
}
