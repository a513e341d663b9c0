//! Movie Shelf Library
//!
//! Keep a personal movie collection in a JSON or CSV file: list, add via
//! OMDb, delete, update, summarize, search, sort, filter and export it as a
//! static web page.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use error::{Error, Result};
