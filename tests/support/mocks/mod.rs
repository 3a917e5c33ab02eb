// tests/support/mocks/mod.rs
pub mod providers;
pub mod store;
pub mod time;

pub use providers::{FAKE_IMAGE_URL, FakeFeedReader, FakeLanguageModel, FakeMedia, feed_item};
pub use store::InMemoryStore;
pub use time::{FixedClock, fixed_now};
