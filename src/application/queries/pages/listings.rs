use super::PageQueryService;
use crate::{
    application::{
        dto::{CategoryPageDto, ExploreDto, SearchResultsDto, TagPageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleFilter, PageRequest},
};

const LISTING_LIMIT: usize = PageRequest::MAX_LIMIT as usize;

impl PageQueryService {
    pub async fn category_page(&self, slug: &str) -> ApplicationResult<CategoryPageDto> {
        let category = self
            .category_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        let articles = self
            .newest(&ArticleFilter::published().in_category(slug), LISTING_LIMIT)
            .await?;
        Ok(CategoryPageDto {
            category: category.into(),
            articles: articles.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn tag_page(&self, slug: &str) -> ApplicationResult<TagPageDto> {
        let tag = self
            .tag_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;
        let articles = self
            .newest(&ArticleFilter::published().with_tag(slug), LISTING_LIMIT)
            .await?;
        Ok(TagPageDto {
            tag: tag.into(),
            articles: articles.into_iter().map(Into::into).collect(),
        })
    }

    /// Published matches on title, content or excerpt; a blank query
    /// matches nothing.
    pub async fn search(&self, query: &str) -> ApplicationResult<SearchResultsDto> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchResultsDto {
                query: String::new(),
                articles: Vec::new(),
            });
        }
        let articles = self
            .newest(&ArticleFilter::published().matching(query), LISTING_LIMIT)
            .await?;
        Ok(SearchResultsDto {
            query: query.to_string(),
            articles: articles.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn explore(&self) -> ApplicationResult<ExploreDto> {
        let articles = self
            .newest(&ArticleFilter::published(), LISTING_LIMIT)
            .await?;
        let categories = self.category_repo.list_with_counts().await?;
        Ok(ExploreDto {
            articles: articles.into_iter().map(Into::into).collect(),
            categories: categories.into_iter().map(Into::into).collect(),
        })
    }
}
