//! Read-only pages for readers. Only published articles and approved
//! comments are ever returned.

use crate::application::dto::{
    ArticlePageDto, CategoryPageDto, ExploreDto, HomeFeedDto, SearchResultsDto, TagPageDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[utoipa::path(
    get,
    path = "/public/home",
    responses((status = 200, description = "Curated hero, latest and editors' pick sections.", body = HomeFeedDto)),
    tag = "Public"
)]
pub async fn home(Extension(state): Extension<HttpState>) -> HttpResult<Json<HomeFeedDto>> {
    state.services.pages.home().await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/public/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Published article with approved comments and related articles.", body = ArticlePageDto),
        (status = 404, description = "Unknown slug or draft.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Public"
)]
pub async fn article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticlePageDto>> {
    state
        .services
        .pages
        .article_page(slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/public/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category and its published articles.", body = CategoryPageDto),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Public"
)]
pub async fn category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CategoryPageDto>> {
    state
        .services
        .pages
        .category_page(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/public/tags/{slug}",
    params(("slug" = String, Path, description = "Tag slug")),
    responses(
        (status = 200, description = "Tag and its published articles.", body = TagPageDto),
        (status = 404, description = "Unknown tag.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Public"
)]
pub async fn tag(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<TagPageDto>> {
    state.services.pages.tag_page(&slug).await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/public/search",
    params(SearchParams),
    responses((status = 200, description = "Published matches; empty for a blank query.", body = SearchResultsDto)),
    tag = "Public"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<SearchResultsDto>> {
    state
        .services
        .pages
        .search(&params.q)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/public/explore",
    responses((status = 200, description = "Published articles and categories with counts.", body = ExploreDto)),
    tag = "Public"
)]
pub async fn explore(Extension(state): Extension<HttpState>) -> HttpResult<Json<ExploreDto>> {
    state.services.pages.explore().await.into_http().map(Json)
}
