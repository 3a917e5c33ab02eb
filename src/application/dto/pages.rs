//! Read models for the public pages and the admin dashboard.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::{ArticleDto, CategoryCountDto, CategoryDto, CommentDto, TagDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeedDto {
    pub hero: Option<ArticleDto>,
    pub latest: Vec<ArticleDto>,
    pub editors_picks: Vec<ArticleDto>,
    /// schema.org `ItemList` of the articles shown.
    #[schema(value_type = Object)]
    pub structured_data: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePageDto {
    pub article: ArticleDto,
    pub comments: Vec<CommentDto>,
    pub related: Vec<ArticleDto>,
    /// schema.org `NewsArticle`.
    #[schema(value_type = Object)]
    pub structured_data: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryPageDto {
    pub category: CategoryDto,
    pub articles: Vec<ArticleDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagPageDto {
    pub tag: TagDto,
    pub articles: Vec<ArticleDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResultsDto {
    pub query: String,
    pub articles: Vec<ArticleDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExploreDto {
    pub articles: Vec<ArticleDto>,
    pub categories: Vec<CategoryCountDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub total_articles: u64,
    pub published_articles: u64,
    pub draft_articles: u64,
    pub featured_articles: u64,
    pub editors_picks: u64,
    pub categories: u64,
    pub tags: u64,
    pub pending_comments: u64,
    pub recent: Vec<ArticleDto>,
}
