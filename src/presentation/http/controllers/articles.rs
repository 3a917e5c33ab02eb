// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleListDto, CommentDto},
    queries::articles::{GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, double_option};
use crate::presentation::http::openapi::MessageResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub editors_pick: Option<bool>,
    /// Include unpublished drafts.
    #[serde(default)]
    pub all: bool,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl From<ArticleListParams> for ListArticlesQuery {
    fn from(params: ArticleListParams) -> Self {
        Self {
            category: params.category,
            tag: params.tag,
            search: params.search,
            featured: params.featured,
            editors_pick: params.editors_pick,
            all: params.all,
            page: params.page.unwrap_or(1),
            limit: params.limit.unwrap_or(0),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub category_id: i64,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub editors_pick: bool,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub content_en: Option<String>,
    #[serde(default)]
    pub excerpt_en: Option<String>,
}

impl From<CreateArticleRequest> for CreateArticleCommand {
    fn from(payload: CreateArticleRequest) -> Self {
        Self {
            title: payload.title,
            content: payload.content,
            category_id: payload.category_id,
            excerpt: payload.excerpt,
            image_url: payload.image_url,
            author: payload.author,
            read_time: payload.read_time,
            published: payload.published,
            featured: payload.featured,
            editors_pick: payload.editors_pick,
            tag_ids: payload.tag_ids,
            title_en: payload.title_en,
            content_en: payload.content_en,
            excerpt_en: payload.excerpt_en,
        }
    }
}

/// Absent fields are left as stored; `null` clears the optional ones.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    pub author: Option<String>,
    pub read_time: Option<u32>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub editors_pick: Option<bool>,
    pub category_id: Option<i64>,
    pub tag_ids: Option<Vec<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub title_en: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub content_en: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub excerpt_en: Option<Option<String>>,
}

impl UpdateArticleRequest {
    fn into_command(self, slug: String) -> UpdateArticleCommand {
        UpdateArticleCommand {
            slug,
            new_slug: self.slug,
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            image_url: self.image_url,
            author: self.author,
            read_time: self.read_time,
            published: self.published,
            featured: self.featured,
            editors_pick: self.editors_pick,
            category_id: self.category_id,
            tag_ids: self.tag_ids,
            title_en: self.title_en,
            content_en: self.content_en,
            excerpt_en: self.excerpt_en,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Page of articles, newest first.", body = ArticleListDto),
        (status = 401, description = "Missing or invalid credentials.")
    ),
    security(("basicAuth" = [])),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListDto>> {
    state
        .services
        .article_queries
        .list_articles(params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let article = state
        .services
        .article_commands
        .create_article(payload.into())
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article, drafts included.", body = ArticleDto),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDto),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    ApiJson(payload): ApiJson<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .update_article(payload.into_command(slug))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article deleted with its comments.", body = MessageResponse),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { slug })
        .await
        .into_http()?;

    Ok(Json(MessageResponse::new("Deleted")))
}

#[utoipa::path(
    get,
    path = "/api/articles/{slug}/comments",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Every comment on the article, newest first.", body = [CommentDto]),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Comments"
)]
pub async fn list_article_comments(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .article_queries
        .list_comments(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ModerationRequest {
    pub approved: bool,
}

#[utoipa::path(
    put,
    path = "/api/articles/{slug}/comments/{id}",
    params(
        ("slug" = String, Path, description = "Article slug"),
        ("id" = i64, Path, description = "Comment id")
    ),
    request_body = ModerationRequest,
    responses(
        (status = 200, description = "Comment with its new approval state.", body = CommentDto),
        (status = 404, description = "Unknown comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Comments"
)]
pub async fn moderate_comment(
    Extension(state): Extension<HttpState>,
    Path((slug, id)): Path<(String, i64)>,
    ApiJson(payload): ApiJson<ModerationRequest>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .set_approval(&slug, id, payload.approved)
        .await
        .into_http()
        .map(Json)
}
