use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("comment id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

/// Reader comment; hidden from public pages until a moderator approves it.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author: String,
    pub email: Option<String>,
    pub content: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author: String,
    pub email: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    pub fn new(
        article_id: ArticleId,
        author: impl Into<String>,
        email: Option<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let author = author.into().trim().to_string();
        let content = content.into().trim().to_string();
        if author.is_empty() {
            return Err(DomainError::validation("comment author is required"));
        }
        if content.is_empty() {
            return Err(DomainError::validation("comment content is required"));
        }
        let email = email
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Ok(Self {
            article_id,
            author,
            email,
            content,
            created_at,
        })
    }
}
