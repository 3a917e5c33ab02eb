use super::PageQueryService;
use crate::{
    application::{dto::DashboardDto, error::ApplicationResult},
    domain::article::ArticleFilter,
};

const RECENT_ARTICLES: usize = 5;

impl PageQueryService {
    pub async fn dashboard(&self) -> ApplicationResult<DashboardDto> {
        let everything = ArticleFilter {
            include_unpublished: true,
            ..ArticleFilter::default()
        };

        let total_articles = self.count(&everything).await?;
        let published_articles = self.count(&ArticleFilter::published()).await?;
        let featured_articles = self.count(&everything.clone().featured(true)).await?;
        let editors_picks = self.count(&everything.clone().editors_pick(true)).await?;
        let categories = self.category_repo.list_with_counts().await?.len() as u64;
        let tags = self.tag_repo.list_with_counts().await?.len() as u64;
        let pending_comments = self.comment_repo.count_pending().await?;
        let recent = self.newest(&everything, RECENT_ARTICLES).await?;

        Ok(DashboardDto {
            total_articles,
            published_articles,
            draft_articles: total_articles.saturating_sub(published_articles),
            featured_articles,
            editors_picks,
            categories,
            tags,
            pending_comments,
            recent: recent.into_iter().map(Into::into).collect(),
        })
    }
}
