// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::taxonomy::{Category, CategoryId, Tag, TagId};
use chrono::{DateTime, Utc};

pub const DEFAULT_AUTHOR: &str = "Editör Ekibi";
pub const DEFAULT_READ_TIME: u32 = 5;

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub title_en: Option<String>,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub content_en: Option<String>,
    pub excerpt: String,
    pub excerpt_en: Option<String>,
    pub image_url: Option<String>,
    pub author: String,
    pub read_time: u32,
    pub published: bool,
    pub featured: bool,
    pub editors_pick: bool,
    pub category: Category,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_publicly_visible(&self) -> bool {
        self.published
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub title_en: Option<String>,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub content_en: Option<String>,
    pub excerpt: String,
    pub excerpt_en: Option<String>,
    pub image_url: Option<String>,
    pub author: String,
    pub read_time: u32,
    pub published: bool,
    pub featured: bool,
    pub editors_pick: bool,
    pub category_id: CategoryId,
    pub tag_ids: Vec<TagId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; `None` leaves the stored value untouched. Nullable
/// columns use a nested option so callers can clear them.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub title_en: Option<Option<String>>,
    pub slug: Option<ArticleSlug>,
    pub content: Option<ArticleContent>,
    pub content_en: Option<Option<String>>,
    pub excerpt: Option<String>,
    pub excerpt_en: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub author: Option<String>,
    pub read_time: Option<u32>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub editors_pick: Option<bool>,
    pub category_id: Option<CategoryId>,
    /// Replaces the whole tag set when present.
    pub tag_ids: Option<Vec<TagId>>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            title_en: None,
            slug: None,
            content: None,
            content_en: None,
            excerpt: None,
            excerpt_en: None,
            image_url: None,
            author: None,
            read_time: None,
            published: None,
            featured: None,
            editors_pick: None,
            category_id: None,
            tag_ids: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn with_editors_pick(mut self, editors_pick: bool) -> Self {
        self.editors_pick = Some(editors_pick);
        self
    }

    pub fn with_tags(mut self, tag_ids: Vec<TagId>) -> Self {
        self.tag_ids = Some(tag_ids);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.title_en.is_none()
            && self.slug.is_none()
            && self.content.is_none()
            && self.content_en.is_none()
            && self.excerpt.is_none()
            && self.excerpt_en.is_none()
            && self.image_url.is_none()
            && self.author.is_none()
            && self.read_time.is_none()
            && self.published.is_none()
            && self.featured.is_none()
            && self.editors_pick.is_none()
            && self.category_id.is_none()
            && self.tag_ids.is_none()
    }
}
