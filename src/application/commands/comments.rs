use std::sync::Arc;

use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{ArticleId, ArticleReadRepository, ArticleSlug},
        comment::{CommentId, CommentRepository, NewComment},
    },
};
use tracing::info;

pub struct CreateCommentCommand {
    pub article_id: i64,
    pub author: String,
    pub email: Option<String>,
    pub content: String,
}

pub struct CommentCommandService {
    comment_repo: Arc<dyn CommentRepository>,
    article_repo: Arc<dyn ArticleReadRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
            clock,
        }
    }

    /// Stores a reader comment awaiting moderation.
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let comment = NewComment::new(
            article_id,
            command.author,
            command.email,
            command.content,
            self.clock.now(),
        )?;

        let article = self
            .article_repo
            .find_by_id(article_id)
            .await?
            .filter(|article| article.is_publicly_visible())
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let created = self.comment_repo.insert(comment).await?;
        info!(article = %article.slug, comment_id = created.id.0, "comment received");
        Ok(CommentDto::from(created).redacted())
    }

    /// Approves or hides a comment on the article identified by `slug`.
    pub async fn set_approval(
        &self,
        slug: &str,
        id: i64,
        approved: bool,
    ) -> ApplicationResult<CommentDto> {
        let id = CommentId::new(id)?;
        let slug = ArticleSlug::new(slug)?;
        let article = self
            .article_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        let belongs = self
            .comment_repo
            .find_by_id(id)
            .await?
            .is_some_and(|comment| comment.article_id == article.id);
        if !belongs {
            return Err(ApplicationError::not_found("comment not found"));
        }
        let comment = self.comment_repo.set_approved(id, approved).await?;
        info!(article = %article.slug, comment_id = id.0, approved, "comment moderated");
        Ok(comment.into())
    }
}
