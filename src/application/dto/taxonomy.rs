use crate::domain::taxonomy::{Category, CategoryWithCount, Tag, TagWithCount};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    pub slug: String,
    pub color: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name,
            name_en: category.name_en,
            slug: category.slug,
            color: category.color,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCountDto {
    #[serde(flatten)]
    pub category: CategoryDto,
    pub article_count: u64,
}

impl From<CategoryWithCount> for CategoryCountDto {
    fn from(value: CategoryWithCount) -> Self {
        Self {
            category: value.category.into(),
            article_count: value.article_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name,
            slug: tag.slug,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagCountDto {
    #[serde(flatten)]
    pub tag: TagDto,
    pub article_count: u64,
}

impl From<TagWithCount> for TagCountDto {
    fn from(value: TagWithCount) -> Self {
        Self {
            tag: value.tag.into(),
            article_count: value.article_count,
        }
    }
}

/// Result of seeding the default categories and tags.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BootstrapDto {
    pub ok: bool,
    pub categories: Vec<CategoryDto>,
    pub tags: Vec<TagDto>,
}
