//! Read models behind the public pages and the admin dashboard.

mod article;
mod dashboard;
mod home;
mod listings;
mod service;
mod structured_data;

pub use home::{EDITORS_PICK_SLOTS, HERO_SLOTS, LATEST_SLOTS, OVERFETCH_FACTOR};
pub use service::PageQueryService;
