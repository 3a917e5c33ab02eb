use std::sync::Arc;

use crate::{
    application::{error::ApplicationResult, site::SiteUrl},
    domain::{
        article::{Article, ArticleFilter, ArticleReadRepository, PageRequest},
        comment::CommentRepository,
        taxonomy::{CategoryRepository, TagRepository},
    },
};

pub struct PageQueryService {
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) site: SiteUrl,
}

impl PageQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        site: SiteUrl,
    ) -> Self {
        Self {
            article_repo,
            category_repo,
            tag_repo,
            comment_repo,
            site,
        }
    }

    pub fn site(&self) -> &SiteUrl {
        &self.site
    }

    /// Newest matches, at most `limit` of them.
    pub(super) async fn newest(
        &self,
        filter: &ArticleFilter,
        limit: usize,
    ) -> ApplicationResult<Vec<Article>> {
        let limit = u32::try_from(limit).unwrap_or(PageRequest::MAX_LIMIT);
        let (articles, _) = self
            .article_repo
            .list_page(filter, PageRequest::first(limit))
            .await?;
        Ok(articles)
    }

    pub(super) async fn count(&self, filter: &ArticleFilter) -> ApplicationResult<u64> {
        let (_, total) = self
            .article_repo
            .list_page(filter, PageRequest::first(1))
            .await?;
        Ok(total)
    }
}
