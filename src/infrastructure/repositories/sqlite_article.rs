use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use super::error::map_sqlx;
use crate::domain::{
    article::{
        Article, ArticleContent, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug,
        ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle, PageRequest,
    },
    errors::{DomainError, DomainResult},
    taxonomy::{Category, CategoryId, Tag, TagId},
};

const SELECT_ARTICLE: &str = "SELECT a.id, a.title, a.title_en, a.slug, a.content, a.content_en, \
a.excerpt, a.excerpt_en, a.image_url, a.author, a.read_time, a.published, a.featured, \
a.editors_pick, a.created_at, a.updated_at, c.id AS category_id, c.name AS category_name, \
c.name_en AS category_name_en, c.slug AS category_slug, c.color AS category_color \
FROM articles a JOIN categories c ON c.id = a.category_id";

const COUNT_ARTICLES: &str =
    "SELECT COUNT(1) FROM articles a JOIN categories c ON c.id = a.category_id";

/// `%fragment%` with LIKE wildcards escaped by `\`.
pub(super) fn like_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    title_en: Option<String>,
    slug: String,
    content: String,
    content_en: Option<String>,
    excerpt: String,
    excerpt_en: Option<String>,
    image_url: Option<String>,
    author: String,
    read_time: i64,
    published: i64,
    featured: i64,
    editors_pick: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_id: i64,
    category_name: String,
    category_name_en: Option<String>,
    category_slug: String,
    category_color: String,
}

#[derive(Debug, FromRow)]
struct ArticleTagRow {
    article_id: i64,
    id: i64,
    name: String,
    slug: String,
}

impl ArticleRow {
    fn into_article(self, tags: Vec<Tag>) -> DomainResult<Article> {
        let read_time = u32::try_from(self.read_time).map_err(|_| {
            DomainError::Persistence(format!("invalid read time {}", self.read_time))
        })?;
        Ok(Article {
            id: ArticleId::new(self.id)?,
            title: ArticleTitle::new(self.title)?,
            title_en: self.title_en,
            slug: ArticleSlug::new(self.slug)?,
            content: ArticleContent::new(self.content)?,
            content_en: self.content_en,
            excerpt: self.excerpt,
            excerpt_en: self.excerpt_en,
            image_url: self.image_url,
            author: self.author,
            read_time,
            published: self.published != 0,
            featured: self.featured != 0,
            editors_pick: self.editors_pick != 0,
            category: Category {
                id: CategoryId::new(self.category_id)?,
                name: self.category_name,
                name_en: self.category_name_en,
                slug: self.category_slug,
                color: self.category_color,
            },
            tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Tags of the given articles, keyed by article id and ordered by name.
async fn load_tags(
    pool: &SqlitePool,
    article_ids: &[i64],
) -> DomainResult<HashMap<i64, Vec<Tag>>> {
    let mut by_article: HashMap<i64, Vec<Tag>> = HashMap::new();
    if article_ids.is_empty() {
        return Ok(by_article);
    }

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT at.article_id, t.id, t.name, t.slug FROM article_tags at \
         JOIN tags t ON t.id = at.tag_id WHERE at.article_id IN (",
    );
    let mut ids = builder.separated(", ");
    for id in article_ids {
        ids.push_bind(*id);
    }
    builder.push(") ORDER BY t.name");

    let rows = builder
        .build_query_as::<ArticleTagRow>()
        .fetch_all(pool)
        .await
        .map_err(map_sqlx)?;

    for row in rows {
        by_article.entry(row.article_id).or_default().push(Tag {
            id: TagId::new(row.id)?,
            name: row.name,
            slug: row.slug,
        });
    }
    Ok(by_article)
}

async fn hydrate(pool: &SqlitePool, rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let mut tags = load_tags(pool, &ids).await?;
    rows.into_iter()
        .map(|row| {
            let article_tags = tags.remove(&row.id).unwrap_or_default();
            row.into_article(article_tags)
        })
        .collect()
}

async fn fetch_one_by_id(pool: &SqlitePool, id: i64) -> DomainResult<Option<Article>> {
    let row = sqlx::query_as::<_, ArticleRow>(&format!("{SELECT_ARTICLE} WHERE a.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(map_sqlx)?;
    match row {
        Some(row) => Ok(hydrate(pool, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

async fn replace_tags(
    conn: &mut SqliteConnection,
    article_id: i64,
    tag_ids: &[TagId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM article_tags WHERE article_id = ?")
        .bind(article_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    for tag_id in tag_ids {
        sqlx::query("INSERT OR IGNORE INTO article_tags (article_id, tag_id) VALUES (?, ?)")
            .bind(article_id)
            .bind(i64::from(*tag_id))
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            title_en,
            slug,
            content,
            content_en,
            excerpt,
            excerpt_en,
            image_url,
            author,
            read_time,
            published,
            featured,
            editors_pick,
            category_id,
            tag_ids,
            created_at,
            updated_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (title, title_en, slug, content, content_en, excerpt, excerpt_en, \
             image_url, author, read_time, published, featured, editors_pick, category_id, \
             created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(title.as_str())
        .bind(title_en)
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(content_en)
        .bind(excerpt)
        .bind(excerpt_en)
        .bind(image_url)
        .bind(author)
        .bind(i64::from(read_time))
        .bind(i64::from(published))
        .bind(i64::from(featured))
        .bind(i64::from(editors_pick))
        .bind(i64::from(category_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_tags(&mut tx, id, &tag_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        fetch_one_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted article vanished".into()))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            title_en,
            slug,
            content,
            content_en,
            excerpt,
            excerpt_en,
            image_url,
            author,
            read_time,
            published,
            featured,
            editors_pick,
            category_id,
            tag_ids,
            updated_at,
        } = update;
        let article_id = i64::from(id);

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE articles SET ");
        let mut set = builder.separated(", ");
        if let Some(title) = title {
            set.push("title = ").push_bind_unseparated(title.into_inner());
        }
        if let Some(title_en) = title_en {
            set.push("title_en = ").push_bind_unseparated(title_en);
        }
        if let Some(slug) = slug {
            set.push("slug = ").push_bind_unseparated(slug.into_inner());
        }
        if let Some(content) = content {
            set.push("content = ").push_bind_unseparated(content.into_inner());
        }
        if let Some(content_en) = content_en {
            set.push("content_en = ").push_bind_unseparated(content_en);
        }
        if let Some(excerpt) = excerpt {
            set.push("excerpt = ").push_bind_unseparated(excerpt);
        }
        if let Some(excerpt_en) = excerpt_en {
            set.push("excerpt_en = ").push_bind_unseparated(excerpt_en);
        }
        if let Some(image_url) = image_url {
            set.push("image_url = ").push_bind_unseparated(image_url);
        }
        if let Some(author) = author {
            set.push("author = ").push_bind_unseparated(author);
        }
        if let Some(read_time) = read_time {
            set.push("read_time = ").push_bind_unseparated(i64::from(read_time));
        }
        if let Some(published) = published {
            set.push("published = ").push_bind_unseparated(i64::from(published));
        }
        if let Some(featured) = featured {
            set.push("featured = ").push_bind_unseparated(i64::from(featured));
        }
        if let Some(editors_pick) = editors_pick {
            set.push("editors_pick = ").push_bind_unseparated(i64::from(editors_pick));
        }
        if let Some(category_id) = category_id {
            set.push("category_id = ").push_bind_unseparated(i64::from(category_id));
        }
        set.push("updated_at = ").push_bind_unseparated(updated_at);
        builder.push(" WHERE id = ");
        builder.push_bind(article_id);

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let result = builder.build().execute(&mut *tx).await.map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        if let Some(tag_ids) = tag_ids {
            replace_tags(&mut tx, article_id, &tag_ids).await?;
        }
        tx.commit().await.map_err(map_sqlx)?;

        fetch_one_by_id(&self.pool, article_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl SqliteArticleReadRepository {
    fn apply_conditions(builder: &mut QueryBuilder<'_, Sqlite>, filter: &ArticleFilter) {
        builder.push(" WHERE 1 = 1");
        if !filter.include_unpublished {
            builder.push(" AND a.published = 1");
        }
        if let Some(category) = filter
            .category_slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            builder.push(" AND c.slug = ");
            builder.push_bind(category.to_string());
        }
        if let Some(tag) = filter.tag_slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            builder.push(
                " AND EXISTS (SELECT 1 FROM article_tags at JOIN tags t ON t.id = at.tag_id \
                 WHERE at.article_id = a.id AND t.slug = ",
            );
            builder.push_bind(tag.to_string());
            builder.push(")");
        }
        if let Some(query) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = like_pattern(query);
            builder.push(" AND (a.title LIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" ESCAPE '\\' OR a.content LIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" ESCAPE '\\' OR a.excerpt LIKE ");
            builder.push_bind(pattern);
            builder.push(" ESCAPE '\\')");
        }
        if let Some(featured) = filter.featured {
            builder.push(" AND a.featured = ");
            builder.push_bind(i64::from(featured));
        }
        if let Some(editors_pick) = filter.editors_pick {
            builder.push(" AND a.editors_pick = ");
            builder.push_bind(i64::from(editors_pick));
        }
        if let Some(slug) = filter.exclude_slug.as_deref() {
            builder.push(" AND a.slug <> ");
            builder.push_bind(slug.to_string());
        }
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        fetch_one_by_id(&self.pool, i64::from(id)).await
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!("{SELECT_ARTICLE} WHERE a.slug = ?"))
            .bind(slug.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        match row {
            Some(row) => Ok(hydrate(&self.pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let mut list_builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_ARTICLE);
        Self::apply_conditions(&mut list_builder, filter);
        list_builder.push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ");
        list_builder.push_bind(i64::from(page.limit));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = list_builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> = QueryBuilder::new(COUNT_ARTICLES);
        Self::apply_conditions(&mut count_builder, filter);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = hydrate(&self.pool, rows).await?;
        Ok((articles, u64::try_from(total).unwrap_or_default()))
    }

    async fn find_by_title_fragment(&self, fragment: &str) -> DomainResult<Option<Article>> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Ok(None);
        }
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "{SELECT_ARTICLE} WHERE a.title LIKE ? ESCAPE '\\' ORDER BY a.id LIMIT 1"
        ))
        .bind(like_pattern(fragment))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;
        match row {
            Some(row) => Ok(hydrate(&self.pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}
