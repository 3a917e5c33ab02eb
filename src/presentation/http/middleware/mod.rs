pub mod guard;
pub mod rate_limit;

pub use guard::{AccessPolicy, access_guard};
