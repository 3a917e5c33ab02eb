use crate::application::dto::DashboardDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "Editorial counts and the most recent articles.", body = DashboardDto),
        (status = 404, description = "Dashboard disabled in production.")
    ),
    security(("basicAuth" = [])),
    tag = "Admin"
)]
pub async fn dashboard(Extension(state): Extension<HttpState>) -> HttpResult<Json<DashboardDto>> {
    state.services.pages.dashboard().await.into_http().map(Json)
}
