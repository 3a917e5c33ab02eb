use crate::application::ports::feeds::SyndicatedItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedItemDto {
    pub title: String,
    pub link: String,
    pub description: String,
    #[serde(default, with = "serde_time::option")]
    pub pub_date: Option<DateTime<Utc>>,
    pub source: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<SyndicatedItem> for FeedItemDto {
    fn from(item: SyndicatedItem) -> Self {
        Self {
            title: item.title,
            link: item.link,
            description: item.description,
            pub_date: item.published_at,
            source: item.source,
            image_url: item.image_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedListingDto {
    pub articles: Vec<FeedItemDto>,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslatedItemDto {
    pub title: String,
    pub description: String,
}
