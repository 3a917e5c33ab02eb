// src/presentation/http/controllers/mod.rs
pub mod admin;
pub mod articles;
pub mod assist;
pub mod comments;
pub mod feeds;
pub mod generation;
pub mod public;
pub mod syndication;
pub mod taxonomy;
