//! gp-cli library
//!
//! Exposes the command tree and the [`App`] dispatcher so they can be driven
//! from tests without spawning the binary.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};

#[cfg(test)]
mod tests;
