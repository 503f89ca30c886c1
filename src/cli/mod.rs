//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Mode implementations.
pub mod commands;

pub use args::Args;
