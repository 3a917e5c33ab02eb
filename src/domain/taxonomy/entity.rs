// src/domain/taxonomy/entity.rs
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("category id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(pub i64);

impl TagId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("tag id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TagId> for i64 {
    fn from(value: TagId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub name_en: Option<String>,
    pub slug: String,
    /// CSS colour used by listing badges, e.g. `#d97706`.
    pub color: String,
}

#[derive(Debug, Clone)]
pub struct CategoryWithCount {
    pub category: Category,
    pub article_count: u64,
}

/// Category keyed by slug; upserting refreshes name, English name and colour.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub name_en: Option<String>,
    pub slug: String,
    pub color: String,
}

impl NewCategory {
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        color: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let slug = slug.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("category name cannot be empty"));
        }
        if slug.trim().is_empty() {
            return Err(DomainError::validation("category slug cannot be empty"));
        }
        Ok(Self {
            name,
            name_en: None,
            slug,
            color: color.into(),
        })
    }

    pub fn with_name_en(mut self, name_en: impl Into<String>) -> Self {
        self.name_en = Some(name_en.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone)]
pub struct TagWithCount {
    pub tag: Tag,
    pub article_count: u64,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: String,
    pub slug: String,
}

impl NewTag {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let slug = slug.into();
        if name.trim().is_empty() || slug.trim().is_empty() {
            return Err(DomainError::validation("tag name and slug are required"));
        }
        Ok(Self { name, slug })
    }
}
