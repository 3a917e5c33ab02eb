use super::{ArticleCommandService, service::tag_ids};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        text::non_blank,
    },
    domain::article::{ArticleContent, ArticleSlug, ArticleTitle, ArticleUpdate},
};
use tracing::info;

/// Partial update addressed by the current slug. Nested options distinguish
/// "leave as is" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    pub slug: String,
    pub new_slug: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<Option<String>>,
    pub author: Option<String>,
    pub read_time: Option<u32>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub editors_pick: Option<bool>,
    pub category_id: Option<i64>,
    pub tag_ids: Option<Vec<i64>>,
    pub title_en: Option<Option<String>>,
    pub content_en: Option<Option<String>>,
    pub excerpt_en: Option<Option<String>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(command.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let mut update = ArticleUpdate::new(article.id, self.clock.now());

        if let Some(title) = command.title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(content) = command.content {
            update = update.with_content(ArticleContent::new(content)?);
        }
        if let Some(ids) = command.tag_ids {
            update = update.with_tags(tag_ids(ids)?);
        }
        if let Some(category_id) = command.category_id {
            update.category_id = Some(self.require_category(category_id).await?.id);
        }
        if let Some(requested) =
            non_blank(command.new_slug).filter(|requested| requested != article.slug.as_str())
        {
            let slug = self
                .slug_service
                .generate_unique_slug(&requested, Some(article.id))
                .await?;
            update = update.with_slug(slug);
        }

        update.excerpt = command.excerpt.map(|excerpt| excerpt.trim().to_string());
        update.image_url = command.image_url.map(non_blank);
        update.author = non_blank(command.author);
        update.read_time = command.read_time.filter(|minutes| *minutes > 0);
        update.title_en = command.title_en.map(non_blank);
        update.content_en = command.content_en.map(non_blank);
        update.excerpt_en = command.excerpt_en.map(non_blank);
        if let Some(published) = command.published {
            update = update.with_published(published);
        }
        if let Some(featured) = command.featured {
            update = update.with_featured(featured);
        }
        if let Some(editors_pick) = command.editors_pick {
            update = update.with_editors_pick(editors_pick);
        }

        if update.is_empty() {
            return Ok(article.into());
        }

        let updated = self.write_repo.update(update).await?;
        info!(slug = %updated.slug, "article updated");
        Ok(updated.into())
    }
}
