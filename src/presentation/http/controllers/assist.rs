use crate::application::assist::{AssistAction, TargetLanguage, WritingStyle};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiJson;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssistRequest {
    /// `translate`, `complete`, `improve` or `excerpt`.
    pub action: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub target_lang: Option<TargetLanguage>,
    #[serde(default)]
    pub style: Option<WritingStyle>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AssistResponse {
    pub result: String,
}

#[utoipa::path(
    post,
    path = "/api/assist",
    request_body = AssistRequest,
    responses(
        (status = 200, description = "Model output.", body = AssistResponse),
        (status = 400, description = "Unknown action or blank text.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Model unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Assist"
)]
pub async fn assist(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<AssistRequest>,
) -> HttpResult<Json<AssistResponse>> {
    let action =
        AssistAction::parse(&payload.action, payload.target_lang, payload.style).into_http()?;
    let result = state
        .services
        .assist
        .run(action, &payload.text)
        .await
        .into_http()?;
    Ok(Json(AssistResponse { result }))
}
