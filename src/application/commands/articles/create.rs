use super::{ArticleCommandService, service::tag_ids};
use crate::{
    application::{
        dto::ArticleDto,
        error::ApplicationResult,
        text::{derive_excerpt, non_blank},
    },
    domain::article::{ArticleContent, ArticleTitle, DEFAULT_AUTHOR, DEFAULT_READ_TIME, NewArticle},
};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub category_id: i64,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub read_time: Option<u32>,
    pub published: bool,
    pub featured: bool,
    pub editors_pick: bool,
    pub tag_ids: Vec<i64>,
    pub title_en: Option<String>,
    pub content_en: Option<String>,
    pub excerpt_en: Option<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let tag_ids = tag_ids(command.tag_ids)?;
        let category = self.require_category(command.category_id).await?;

        let slug = self
            .slug_service
            .generate_unique_slug(title.as_str(), None)
            .await?;
        let excerpt = non_blank(command.excerpt).unwrap_or_else(|| derive_excerpt(&content));
        let now = self.clock.now();

        let new_article = NewArticle {
            title,
            title_en: non_blank(command.title_en),
            slug,
            content,
            content_en: non_blank(command.content_en),
            excerpt,
            excerpt_en: non_blank(command.excerpt_en),
            image_url: non_blank(command.image_url),
            author: non_blank(command.author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            read_time: command
                .read_time
                .filter(|minutes| *minutes > 0)
                .unwrap_or(DEFAULT_READ_TIME),
            published: command.published,
            featured: command.featured,
            editors_pick: command.editors_pick,
            category_id: category.id,
            tag_ids,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        info!(slug = %created.slug, published = created.published, "article created");
        Ok(created.into())
    }
}
