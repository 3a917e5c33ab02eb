use crate::application::ApplicationResult;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaHit {
    pub page_id: u64,
    pub title: String,
}

/// Metadata of one media file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaInfo {
    pub page_id: u64,
    pub title: String,
    pub mime: Option<String>,
    pub url: Option<String>,
    pub thumb_url: Option<String>,
}

/// External image index.
#[async_trait]
pub trait MediaSearch: Send + Sync {
    /// Image files matching `query`, most relevant first.
    async fn search(&self, query: &str, limit: u32) -> ApplicationResult<Vec<MediaHit>>;

    /// Metadata for the given pages; order is not significant.
    async fn describe(&self, page_ids: &[u64]) -> ApplicationResult<Vec<MediaInfo>>;
}
