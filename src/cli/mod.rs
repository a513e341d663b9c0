//! Command line interface: arguments, menu, prompts and the app loop.

pub mod app;
pub mod args;
pub mod menu;
pub mod prompt;
