use std::sync::Arc;

use tracing::{info, warn};

use super::{
    categories::GenerationCategory,
    drafts::{GeneratedDraft, parse_article_draft, parse_drafts},
    prompts,
};
use crate::{
    application::{
        dto::{ArticleDraftDto, GenerationReportDto},
        error::{ApplicationError, ApplicationResult},
        images::{ImageHints, ImageResolver},
        ports::{language_model::LanguageModel, time::Clock},
        text::truncate_chars,
    },
    domain::{
        article::{
            Article, ArticleContent, ArticleReadRepository, ArticleTitle, ArticleWriteRepository,
            DEFAULT_AUTHOR, NewArticle, services::ArticleSlugService,
        },
        taxonomy::CategoryRepository,
    },
};

pub const DEFAULT_DRAFT_COUNT: u32 = 5;
pub const MAX_DRAFT_COUNT: u32 = 10;
/// Leading title characters compared against existing titles.
pub const DUPLICATE_PREFIX_CHARS: usize = 30;

/// Bulk generation request. Merchandising flags are applied to every saved
/// article as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateArticlesCommand {
    pub count: u32,
    pub featured: bool,
    pub editors_pick: bool,
}

impl Default for GenerateArticlesCommand {
    fn default() -> Self {
        Self {
            count: DEFAULT_DRAFT_COUNT,
            featured: false,
            editors_pick: false,
        }
    }
}

pub struct ContentGenerationService {
    model: Arc<dyn LanguageModel>,
    write_repo: Arc<dyn ArticleWriteRepository>,
    read_repo: Arc<dyn ArticleReadRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    slug_service: Arc<ArticleSlugService>,
    images: Arc<ImageResolver>,
    clock: Arc<dyn Clock>,
}

impl ContentGenerationService {
    pub fn new(
        model: Arc<dyn LanguageModel>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<ArticleSlugService>,
        images: Arc<ImageResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            model,
            write_repo,
            read_repo,
            category_repo,
            slug_service,
            images,
            clock,
        }
    }

    /// Asks the model for a batch of drafts and publishes the ones that are
    /// well formed and not already covered. Drafts are processed one at a
    /// time.
    pub async fn generate(
        &self,
        command: GenerateArticlesCommand,
    ) -> ApplicationResult<GenerationReportDto> {
        let count = command.count.clamp(1, MAX_DRAFT_COUNT);
        let answer = self.model.complete(prompts::bulk_request(count)).await?;
        let drafts = parse_drafts(&answer)?;
        if drafts.is_empty() {
            return Err(ApplicationError::malformed("no articles generated", answer));
        }

        let mut saved = Vec::with_capacity(drafts.len());
        for draft in drafts {
            if let Some(article) = self.save_draft(draft, command).await? {
                saved.push(article.into());
            }
        }

        info!(
            provider = self.model.provider(),
            requested = count,
            saved = saved.len(),
            "generation finished"
        );
        Ok(GenerationReportDto {
            success: true,
            count: saved.len(),
            articles: saved,
        })
    }

    async fn save_draft(
        &self,
        draft: GeneratedDraft,
        command: GenerateArticlesCommand,
    ) -> ApplicationResult<Option<Article>> {
        let GeneratedDraft {
            title,
            excerpt,
            content,
            category,
            artist,
            year: _,
            image_search,
        } = draft;

        let prefix = truncate_chars(&title, DUPLICATE_PREFIX_CHARS);
        if let Some(existing) = self.read_repo.find_by_title_fragment(&prefix).await? {
            info!(title = %title, existing = %existing.slug, "skipping duplicate draft");
            return Ok(None);
        }

        let category = GenerationCategory::from_display_name(&category);
        let category_row = match self.category_repo.find_by_slug(category.slug()).await? {
            Some(row) => row,
            None => self.category_repo.upsert(category.to_new_category()?).await?,
        };

        let title = ArticleTitle::new(title)?;
        let content = ArticleContent::new(content)?;
        let slug = self
            .slug_service
            .generate_unique_slug(title.as_str(), None)
            .await?;

        let hints = ImageHints::for_title(title.as_str())
            .with_category(category.display_name())
            .with_artist(artist)
            .with_search_hint(image_search);
        let image_url = self.images.resolve(&hints).await;
        if image_url.is_none() {
            warn!(slug = %slug, "no image found for generated article");
        }

        let now = self.clock.now();
        let article = NewArticle {
            read_time: content.estimated_read_time(),
            title,
            title_en: None,
            slug,
            content,
            content_en: None,
            excerpt,
            excerpt_en: None,
            image_url,
            author: DEFAULT_AUTHOR.to_string(),
            published: true,
            featured: command.featured,
            editors_pick: command.editors_pick,
            category_id: category_row.id,
            tag_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        Ok(Some(self.write_repo.insert(article).await?))
    }

    /// One article drafted from a free-form brief; nothing is stored.
    pub async fn draft_article(&self, brief: &str) -> ApplicationResult<ArticleDraftDto> {
        let brief = brief.trim();
        if brief.is_empty() {
            return Err(ApplicationError::validation("missing prompt"));
        }
        let answer = self.model.complete(prompts::single_request(brief)).await?;
        if answer.trim().is_empty() {
            return Err(ApplicationError::malformed("empty AI response", answer));
        }
        parse_article_draft(&answer)
    }
}
