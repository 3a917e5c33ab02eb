use crate::application::ApplicationResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// External RSS/Atom source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSource {
    pub name: &'static str,
    pub url: &'static str,
}

pub const FEED_SOURCES: &[FeedSource] = &[
    FeedSource {
        name: "Pitchfork",
        url: "https://pitchfork.com/feed/feed-news/rss",
    },
    FeedSource {
        name: "NME",
        url: "https://www.nme.com/news/music/feed",
    },
    FeedSource {
        name: "Consequence of Sound",
        url: "https://consequence.net/feed/",
    },
    FeedSource {
        name: "Stereogum",
        url: "https://www.stereogum.com/feed/",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyndicatedItem {
    pub title: String,
    pub description: String,
    pub link: String,
    pub published_at: Option<DateTime<Utc>>,
    pub source: String,
    pub image_url: Option<String>,
}

#[async_trait]
pub trait FeedReader: Send + Sync {
    async fn fetch(&self, source: &FeedSource) -> ApplicationResult<Vec<SyndicatedItem>>;
}
