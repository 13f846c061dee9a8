//! CLI command definitions and handlers

mod args;

pub mod enhance;
pub mod search;

pub use args::{Cli, Commands, EnhanceArgs, SearchArgs};
