use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ArticleDto;

/// Outcome of a bulk generation run.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationReportDto {
    pub success: bool,
    pub count: usize,
    pub articles: Vec<ArticleDto>,
}

/// Unsaved single-article draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraftDto {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category_slug: String,
    pub tags: Vec<String>,
}
