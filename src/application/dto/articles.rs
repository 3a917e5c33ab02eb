use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;
use super::taxonomy::{CategoryDto, TagDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub title_en: Option<String>,
    pub slug: String,
    pub content: String,
    #[serde(default)]
    pub content_en: Option<String>,
    pub excerpt: String,
    #[serde(default)]
    pub excerpt_en: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub author: String,
    pub read_time: u32,
    pub published: bool,
    pub featured: bool,
    pub editors_pick: bool,
    pub category: CategoryDto,
    pub tags: Vec<TagDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            title_en: article.title_en,
            slug: article.slug.into_inner(),
            content: article.content.into_inner(),
            content_en: article.content_en,
            excerpt: article.excerpt,
            excerpt_en: article.excerpt_en,
            image_url: article.image_url,
            author: article.author,
            read_time: article.read_time,
            published: article.published,
            featured: article.featured,
            editors_pick: article.editors_pick,
            category: article.category.into(),
            tags: article.tags.into_iter().map(Into::into).collect(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
