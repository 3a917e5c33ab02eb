// src/application/ports/mod.rs
pub mod feeds;
pub mod language_model;
pub mod media;
pub mod time;
pub mod util;
