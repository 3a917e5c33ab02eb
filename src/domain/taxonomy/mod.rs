pub mod entity;
pub mod repository;

pub use entity::{
    Category, CategoryId, CategoryWithCount, NewCategory, NewTag, Tag, TagId, TagWithCount,
};
pub use repository::{CategoryRepository, TagRepository};
