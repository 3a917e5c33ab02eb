use super::{PageQueryService, structured_data};
use crate::{
    application::{
        dto::{ArticlePageDto, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleFilter, ArticleSlug, FeedCurator},
};

pub const RELATED_SLOTS: usize = 3;

impl PageQueryService {
    /// Published article with its approved comments and a few related
    /// articles from the same category. Drafts read as missing.
    pub async fn article_page(&self, slug: String) -> ApplicationResult<ArticlePageDto> {
        let not_found = || ApplicationError::not_found("article not found");
        let slug = ArticleSlug::new(slug).map_err(|_| not_found())?;
        let article = self
            .article_repo
            .find_by_slug(&slug)
            .await?
            .filter(|article| article.is_publicly_visible())
            .ok_or_else(not_found)?;

        let comments = self
            .comment_repo
            .list_for_article(article.id, true)
            .await?
            .into_iter()
            .map(|comment| CommentDto::from(comment).redacted())
            .collect();

        let pool = self
            .newest(
                &ArticleFilter::published()
                    .in_category(article.category.slug.clone())
                    .excluding(article.slug.as_str()),
                RELATED_SLOTS * super::OVERFETCH_FACTOR,
            )
            .await?;
        let mut curator = FeedCurator::new();
        curator.observe(&article);
        let related = curator.select(&pool, RELATED_SLOTS);

        let structured_data = structured_data::news_article(&self.site, &article);
        Ok(ArticlePageDto {
            article: article.into(),
            comments,
            related: related.into_iter().map(Into::into).collect(),
            structured_data,
        })
    }
}
