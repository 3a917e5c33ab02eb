use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    pub author: String,
    /// Only exposed on administrative routes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub content: String,
    pub approved: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl CommentDto {
    /// Drops fields readers must not see.
    pub fn redacted(mut self) -> Self {
        self.email = None;
        self
    }
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            author: comment.author,
            email: comment.email,
            content: comment.content,
            approved: comment.approved,
            created_at: comment.created_at,
        }
    }
}
