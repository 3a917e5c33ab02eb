// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleSlug,
};
use tracing::info;

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Hard delete; tag links and comments go with the article.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let slug = ArticleSlug::new(command.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.write_repo.delete(article.id).await?;
        info!(slug = %slug, "article deleted");
        Ok(())
    }
}
