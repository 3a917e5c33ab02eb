use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use super::error::map_sqlx;
use crate::domain::{
    article::ArticleId,
    comment::{Comment, CommentId, CommentRepository, NewComment},
    errors::{DomainError, DomainResult},
};

const COMMENT_COLUMNS: &str = "id, article_id, author, email, content, approved, created_at";

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author: String,
    email: Option<String>,
    content: String,
    approved: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author: row.author,
            email: row.email,
            content: row.content,
            approved: row.approved != 0,
            created_at: row.created_at,
        })
    }
}

#[derive(Clone)]
pub struct SqliteCommentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (article_id, author, email, content, approved, created_at) \
             VALUES (?, ?, ?, ?, 0, ?) RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(i64::from(comment.article_id))
        .bind(comment.author)
        .bind(comment.email)
        .bind(comment.content)
        .bind(comment.created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_for_article(
        &self,
        article_id: ArticleId,
        approved_only: bool,
    ) -> DomainResult<Vec<Comment>> {
        let sql = if approved_only {
            format!(
                "SELECT {COMMENT_COLUMNS} FROM comments WHERE article_id = ? AND approved = 1 \
                 ORDER BY created_at DESC, id DESC"
            )
        } else {
            format!(
                "SELECT {COMMENT_COLUMNS} FROM comments WHERE article_id = ? \
                 ORDER BY created_at DESC, id DESC"
            )
        };

        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(article_id))
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn set_approved(&self, id: CommentId, approved: bool) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "UPDATE comments SET approved = ? WHERE id = ? RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(i64::from(approved))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.ok_or_else(|| DomainError::NotFound("comment not found".into()))
            .and_then(Comment::try_from)
    }

    async fn count_pending(&self) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM comments WHERE approved = 0")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
