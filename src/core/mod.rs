//! Collection operations: statistics, search, sorting and filtering.

pub mod query;
pub mod search;
pub mod similarity;
pub mod stats;
