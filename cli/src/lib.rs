pub mod commands;
pub mod config;
pub mod logging;

/// bundlecfg version, reported by `--version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
