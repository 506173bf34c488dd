//! Demo host, script replay, configuration
//!
//! This crate provides the `laneboard` command-line interface. It plays the
//! part of an embedding application: it owns a copy of the events, applies
//! the controller's callbacks to it and pushes it back.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod sample;

pub use cli::Cli;
pub use error::{CliError, CliResult};
