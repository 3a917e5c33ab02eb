use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleSlug},
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    async fn load(&self, slug: String) -> ApplicationResult<Article> {
        let slug = ArticleSlug::new(slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        Ok(self.load(query.slug).await?.into())
    }

    /// Every comment on the article, pending ones included, newest first.
    pub async fn list_comments(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let article = self.load(query.slug).await?;
        let comments = self.comment_repo.list_for_article(article.id, false).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
