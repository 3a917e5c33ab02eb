use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleListDto, error::ApplicationResult, text::non_blank},
    domain::article::{ArticleFilter, PageRequest},
};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub editors_pick: Option<bool>,
    /// Include drafts.
    pub all: bool,
    pub page: u32,
    pub limit: u32,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ArticleListDto> {
        let filter = ArticleFilter {
            include_unpublished: query.all,
            category_slug: non_blank(query.category),
            tag_slug: non_blank(query.tag),
            search: non_blank(query.search),
            featured: query.featured,
            editors_pick: query.editors_pick,
            exclude_slug: None,
        };
        let page = PageRequest::new(query.page, query.limit);

        let (records, total) = self.read_repo.list_page(&filter, page).await?;
        let articles = records.into_iter().map(Into::into).collect();
        Ok(ArticleListDto::new(articles, total, page.page, page.limit))
    }
}
