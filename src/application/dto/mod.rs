pub mod articles;
pub mod comments;
pub mod generation;
pub mod pages;
pub mod pagination;
pub mod serde_time;
pub mod syndication;
pub mod taxonomy;

pub use articles::ArticleDto;
pub use comments::CommentDto;
pub use generation::{ArticleDraftDto, GenerationReportDto};
pub use pages::{
    ArticlePageDto, CategoryPageDto, DashboardDto, ExploreDto, HomeFeedDto, SearchResultsDto,
    TagPageDto,
};
pub use pagination::ArticleListDto;
pub use syndication::{FeedItemDto, FeedListingDto, TranslatedItemDto};
pub use taxonomy::{BootstrapDto, CategoryCountDto, CategoryDto, TagCountDto, TagDto};
