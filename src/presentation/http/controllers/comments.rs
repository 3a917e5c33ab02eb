use crate::application::{commands::comments::CreateCommentCommand, dto::CommentDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiJson;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub article_id: i64,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub content: String,
}

#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment stored and awaiting moderation.", body = CommentDto),
        (status = 400, description = "Missing author or content.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown or unpublished article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = CreateCommentCommand {
        article_id: payload.article_id,
        author: payload.author,
        email: payload.email,
        content: payload.content,
    };
    let comment = state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(comment)))
}
