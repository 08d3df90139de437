//! Subcommand implementations
//!
//! Each command loads the config through [`crate::config`] and reports on
//! stdout; diagnostics go through `tracing` to stderr.

pub mod alias;
pub mod check;
pub mod show;
pub mod watch;
