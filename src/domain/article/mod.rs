pub mod curation;
pub mod entity;
pub mod repository;
pub mod services;
pub mod title;
pub mod value_objects;

pub use curation::{Curatable, FeedCurator};
pub use entity::{Article, ArticleUpdate, DEFAULT_AUTHOR, DEFAULT_READ_TIME, NewArticle};
pub use repository::{ArticleFilter, ArticleReadRepository, ArticleWriteRepository, PageRequest};
pub use value_objects::{ArticleContent, ArticleId, ArticleSlug, ArticleTitle};
