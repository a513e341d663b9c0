//! External services.

pub mod omdb;
