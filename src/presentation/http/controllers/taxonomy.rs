use crate::application::dto::{BootstrapDto, CategoryCountDto, TagCountDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/categories",
    responses((status = 200, description = "Categories ordered by name with article counts.", body = [CategoryCountDto])),
    security(("basicAuth" = [])),
    tag = "Taxonomy"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryCountDto>>> {
    state
        .services
        .taxonomy_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/tags",
    responses((status = 200, description = "Tags ordered by name with article counts.", body = [TagCountDto])),
    security(("basicAuth" = [])),
    tag = "Taxonomy"
)]
pub async fn list_tags(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<TagCountDto>>> {
    state
        .services
        .taxonomy_queries
        .list_tags()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/bootstrap",
    responses((status = 200, description = "Default categories and tags upserted.", body = BootstrapDto)),
    security(("basicAuth" = [])),
    tag = "Taxonomy"
)]
pub async fn bootstrap(Extension(state): Extension<HttpState>) -> HttpResult<Json<BootstrapDto>> {
    state
        .services
        .taxonomy_commands
        .bootstrap()
        .await
        .into_http()
        .map(Json)
}
