//! Output generators.

pub mod website;
