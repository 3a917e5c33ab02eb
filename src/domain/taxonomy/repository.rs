use crate::domain::errors::DomainResult;
use crate::domain::taxonomy::entity::{
    Category, CategoryId, CategoryWithCount, NewCategory, NewTag, Tag, TagWithCount,
};
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by name, each with its total article count.
    async fn list_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Category>>;
    async fn upsert(&self, category: NewCategory) -> DomainResult<Category>;
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn list_with_counts(&self) -> DomainResult<Vec<TagWithCount>>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Tag>>;
    async fn upsert(&self, tag: NewTag) -> DomainResult<Tag>;
}
