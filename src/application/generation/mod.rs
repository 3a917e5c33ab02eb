//! Article drafting through an external language model.

mod categories;
mod drafts;
mod prompts;
mod service;

pub use categories::{DRAFT_CATEGORY_SLUGS, GenerationCategory};
pub use drafts::{
    DraftShapeError, GeneratedDraft, extract_json_array, extract_json_object, parse_article_draft,
    parse_drafts,
};
pub use service::{
    ContentGenerationService, DEFAULT_DRAFT_COUNT, DUPLICATE_PREFIX_CHARS, GenerateArticlesCommand,
    MAX_DRAFT_COUNT,
};
