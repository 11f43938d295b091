//! Tooling & Integration Layer
//!
//! Command-line access to the ancestry pipeline.

pub mod cli;

pub use cli::{Cli, CliContext, Commands, OutputFormat, SourceArgs};
