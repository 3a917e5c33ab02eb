pub mod assist;
pub mod commands;
pub mod dto;
pub mod error;
pub mod generation;
pub mod images;
pub mod ports;
pub mod publishing;
pub mod queries;
pub mod services;
pub mod site;
pub mod syndication;
pub mod text;

pub use error::{ApplicationError, ApplicationResult};
