//! Data models.

pub mod config;
pub mod movie;

pub use movie::{Collection, Movie};
