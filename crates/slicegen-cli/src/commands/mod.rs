//! Command handlers. Each submodule implements exactly one subcommand.

pub mod completions;
pub mod list;
pub mod make;
