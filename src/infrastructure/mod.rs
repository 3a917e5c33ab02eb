pub mod database;
pub mod providers;
pub mod repositories;
pub mod time;
pub mod util;
