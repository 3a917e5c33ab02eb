use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use super::error::map_sqlx;
use crate::domain::{
    errors::DomainResult,
    taxonomy::{
        Category, CategoryId, CategoryRepository, CategoryWithCount, NewCategory, NewTag, Tag,
        TagId, TagRepository, TagWithCount,
    },
};

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    name_en: Option<String>,
    slug: String,
    color: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = crate::domain::errors::DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: row.name,
            name_en: row.name_en,
            slug: row.slug,
            color: row.color,
        })
    }
}

#[derive(Debug, FromRow)]
struct CategoryCountRow {
    #[sqlx(flatten)]
    category: CategoryRow,
    article_count: i64,
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
    slug: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = crate::domain::errors::DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: row.name,
            slug: row.slug,
        })
    }
}

#[derive(Debug, FromRow)]
struct TagCountRow {
    #[sqlx(flatten)]
    tag: TagRow,
    article_count: i64,
}

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCategoryRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn list_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>> {
        let rows = sqlx::query_as::<_, CategoryCountRow>(
            "SELECT c.id, c.name, c.name_en, c.slug, c.color, COUNT(a.id) AS article_count \
             FROM categories c LEFT JOIN articles a ON a.category_id = c.id \
             GROUP BY c.id ORDER BY c.name",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(CategoryWithCount {
                    category: Category::try_from(row.category)?,
                    article_count: u64::try_from(row.article_count).unwrap_or_default(),
                })
            })
            .collect()
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, name_en, slug, color FROM categories WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, name_en, slug, color FROM categories WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn upsert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            name,
            name_en,
            slug,
            color,
        } = category;

        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, name_en, slug, color) VALUES (?, ?, ?, ?) \
             ON CONFLICT (slug) DO UPDATE SET name = excluded.name, \
             name_en = COALESCE(excluded.name_en, categories.name_en), color = excluded.color \
             RETURNING id, name, name_en, slug, color",
        )
        .bind(name)
        .bind(name_en)
        .bind(slug)
        .bind(color)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }
}

#[derive(Clone)]
pub struct SqliteTagRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTagRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for SqliteTagRepository {
    async fn list_with_counts(&self) -> DomainResult<Vec<TagWithCount>> {
        let rows = sqlx::query_as::<_, TagCountRow>(
            "SELECT t.id, t.name, t.slug, COUNT(at.article_id) AS article_count \
             FROM tags t LEFT JOIN article_tags at ON at.tag_id = t.id \
             GROUP BY t.id ORDER BY t.name",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(TagWithCount {
                    tag: Tag::try_from(row.tag)?,
                    article_count: u64::try_from(row.article_count).unwrap_or_default(),
                })
            })
            .collect()
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>("SELECT id, name, slug FROM tags WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn upsert(&self, tag: NewTag) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (name, slug) VALUES (?, ?) \
             ON CONFLICT (slug) DO UPDATE SET name = excluded.name \
             RETURNING id, name, slug",
        )
        .bind(tag.name)
        .bind(tag.slug)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Tag::try_from(row)
    }
}
