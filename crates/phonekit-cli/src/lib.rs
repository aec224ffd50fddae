//! # phonekit CLI
//!
//! Argument definitions and command handlers for the `phonekit` binary.
//! Handlers write to any `io::Write` so they can be exercised in tests.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};
pub use commands::{load_config, load_registry, run};
