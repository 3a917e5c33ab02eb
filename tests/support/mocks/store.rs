// tests/support/mocks/store.rs
use std::sync::Mutex;

use async_trait::async_trait;
use bendinledim::domain::{
    article::{
        Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
        ArticleWriteRepository, NewArticle, PageRequest,
    },
    comment::{Comment, CommentId, CommentRepository, NewComment},
    errors::{DomainError, DomainResult},
    taxonomy::{
        Category, CategoryId, CategoryRepository, CategoryWithCount, NewCategory, NewTag, Tag,
        TagId, TagRepository, TagWithCount,
    },
};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    tags: Vec<Tag>,
    articles: Vec<Article>,
    comments: Vec<Comment>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn category(&self, id: CategoryId) -> DomainResult<Category> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("referenced record not found"))
    }

    fn tags(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        let mut tags = ids
            .iter()
            .map(|id| {
                self.tags
                    .iter()
                    .find(|t| t.id == *id)
                    .cloned()
                    .ok_or_else(|| DomainError::not_found("referenced record not found"))
            })
            .collect::<DomainResult<Vec<_>>>()?;
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        tags.dedup_by(|a, b| a.id == b.id);
        Ok(tags)
    }

    fn slug_taken(&self, slug: &ArticleSlug, except: Option<ArticleId>) -> bool {
        self.articles
            .iter()
            .any(|a| a.slug == *slug && Some(a.id) != except)
    }
}

fn matches(article: &Article, filter: &ArticleFilter) -> bool {
    if !filter.include_unpublished && !article.published {
        return false;
    }
    if let Some(slug) = &filter.category_slug {
        if article.category.slug != *slug {
            return false;
        }
    }
    if let Some(slug) = &filter.tag_slug {
        if !article.tags.iter().any(|t| t.slug == *slug) {
            return false;
        }
    }
    if let Some(query) = &filter.search {
        let query = query.to_lowercase();
        let hit = [article.title.as_str(), article.content.as_str(), &article.excerpt]
            .iter()
            .any(|field| field.to_lowercase().contains(&query));
        if !hit {
            return false;
        }
    }
    if filter.featured.is_some_and(|f| f != article.featured) {
        return false;
    }
    if filter.editors_pick.is_some_and(|e| e != article.editors_pick) {
        return false;
    }
    if let Some(slug) = &filter.exclude_slug {
        if article.slug.as_str() == slug {
            return false;
        }
    }
    true
}

/// One in-memory database backing every repository trait, with the same
/// ordering and constraint behavior as the SQLite repositories.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn articles(&self) -> Vec<Article> {
        self.tables.lock().unwrap().articles.clone()
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.tables.lock().unwrap().comments.clone()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.tables.lock().unwrap().categories.clone()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let mut tables = self.tables.lock().unwrap();
        if tables.slug_taken(&new.slug, None) {
            return Err(DomainError::Conflict("article slug already exists".into()));
        }
        let category = tables.category(new.category_id)?;
        let tags = tables.tags(&new.tag_ids)?;
        let id = ArticleId(tables.next_id());
        let article = Article {
            id,
            title: new.title,
            title_en: new.title_en,
            slug: new.slug,
            content: new.content,
            content_en: new.content_en,
            excerpt: new.excerpt,
            excerpt_en: new.excerpt_en,
            image_url: new.image_url,
            author: new.author,
            read_time: new.read_time,
            published: new.published,
            featured: new.featured,
            editors_pick: new.editors_pick,
            category,
            tags,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        tables.articles.push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(slug) = &update.slug {
            if tables.slug_taken(slug, Some(update.id)) {
                return Err(DomainError::Conflict("article slug already exists".into()));
            }
        }
        let category = update.category_id.map(|id| tables.category(id)).transpose()?;
        let tags = update.tag_ids.as_deref().map(|ids| tables.tags(ids)).transpose()?;
        let article = tables
            .articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::not_found("article not found"))?;

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(value) = update.title_en {
            article.title_en = value;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        if let Some(value) = update.content_en {
            article.content_en = value;
        }
        if let Some(excerpt) = update.excerpt {
            article.excerpt = excerpt;
        }
        if let Some(value) = update.excerpt_en {
            article.excerpt_en = value;
        }
        if let Some(value) = update.image_url {
            article.image_url = value;
        }
        if let Some(author) = update.author {
            article.author = author;
        }
        if let Some(read_time) = update.read_time {
            article.read_time = read_time;
        }
        if let Some(published) = update.published {
            article.published = published;
        }
        if let Some(featured) = update.featured {
            article.featured = featured;
        }
        if let Some(pick) = update.editors_pick {
            article.editors_pick = pick;
        }
        if let Some(category) = category {
            article.category = category;
        }
        if let Some(tags) = tags {
            article.tags = tags;
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.articles.len();
        tables.articles.retain(|a| a.id != id);
        if tables.articles.len() == before {
            return Err(DomainError::not_found("article not found"));
        }
        tables.comments.retain(|c| c.article_id != id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.articles.iter().find(|a| a.slug == *slug).cloned())
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let tables = self.tables.lock().unwrap();
        let mut hits: Vec<Article> = tables
            .articles
            .iter()
            .filter(|a| matches(a, filter))
            .cloned()
            .collect();
        hits.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        let total = hits.len() as u64;
        let rows = hits
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .collect();
        Ok((rows, total))
    }

    async fn find_by_title_fragment(&self, fragment: &str) -> DomainResult<Option<Article>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .articles
            .iter()
            .find(|a| a.title.as_str().contains(fragment))
            .cloned())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<CategoryWithCount> = tables
            .categories
            .iter()
            .map(|category| CategoryWithCount {
                category: category.clone(),
                article_count: tables
                    .articles
                    .iter()
                    .filter(|a| a.category.id == category.id)
                    .count() as u64,
            })
            .collect();
        rows.sort_by(|a, b| a.category.name.cmp(&b.category.name));
        Ok(rows)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Category>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn upsert(&self, new: NewCategory) -> DomainResult<Category> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(existing) = tables.categories.iter_mut().find(|c| c.slug == new.slug) {
            existing.name = new.name;
            existing.name_en = new.name_en;
            existing.color = new.color;
            return Ok(existing.clone());
        }
        let category = Category {
            id: CategoryId(tables.next_id()),
            name: new.name,
            name_en: new.name_en,
            slug: new.slug,
            color: new.color,
        };
        tables.categories.push(category.clone());
        Ok(category)
    }
}

#[async_trait]
impl TagRepository for InMemoryStore {
    async fn list_with_counts(&self) -> DomainResult<Vec<TagWithCount>> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<TagWithCount> = tables
            .tags
            .iter()
            .map(|tag| TagWithCount {
                tag: tag.clone(),
                article_count: tables
                    .articles
                    .iter()
                    .filter(|a| a.tags.iter().any(|t| t.id == tag.id))
                    .count() as u64,
            })
            .collect();
        rows.sort_by(|a, b| a.tag.name.cmp(&b.tag.name));
        Ok(rows)
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Tag>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.tags.iter().find(|t| t.slug == slug).cloned())
    }

    async fn upsert(&self, new: NewTag) -> DomainResult<Tag> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(existing) = tables.tags.iter_mut().find(|t| t.slug == new.slug) {
            existing.name = new.name;
            return Ok(existing.clone());
        }
        let tag = Tag {
            id: TagId(tables.next_id()),
            name: new.name,
            slug: new.slug,
        };
        tables.tags.push(tag.clone());
        Ok(tag)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(&self, new: NewComment) -> DomainResult<Comment> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.articles.iter().any(|a| a.id == new.article_id) {
            return Err(DomainError::not_found("referenced record not found"));
        }
        let comment = Comment {
            id: CommentId(tables.next_id()),
            article_id: new.article_id,
            author: new.author,
            email: new.email,
            content: new.content,
            approved: false,
            created_at: new.created_at,
        };
        tables.comments.push(comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.comments.iter().find(|c| c.id == id).cloned())
    }

    async fn list_for_article(
        &self,
        article_id: ArticleId,
        approved_only: bool,
    ) -> DomainResult<Vec<Comment>> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|c| c.article_id == article_id && (!approved_only || c.approved))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(rows)
    }

    async fn set_approved(&self, id: CommentId, approved: bool) -> DomainResult<Comment> {
        let mut tables = self.tables.lock().unwrap();
        let comment = tables
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found("comment not found"))?;
        comment.approved = approved;
        Ok(comment.clone())
    }

    async fn count_pending(&self) -> DomainResult<u64> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.comments.iter().filter(|c| !c.approved).count() as u64)
    }
}
