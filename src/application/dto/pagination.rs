use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::articles::ArticleDto;

/// One page of an article listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListDto {
    pub articles: Vec<ArticleDto>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u64,
}

impl ArticleListDto {
    pub fn new(articles: Vec<ArticleDto>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit))
        };
        Self {
            articles,
            total,
            page,
            total_pages,
        }
    }
}
