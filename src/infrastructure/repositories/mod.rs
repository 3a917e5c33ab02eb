// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;
mod sqlite_comment;
mod sqlite_taxonomy;

pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_comment::SqliteCommentRepository;
pub use sqlite_taxonomy::{SqliteCategoryRepository, SqliteTagRepository};
