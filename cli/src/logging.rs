use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "bundlecfg=info,bundlecfg_core=info";
const VERBOSE_FILTER: &str = "bundlecfg=debug,bundlecfg_core=debug";

/// Initialize logging for the bundlecfg CLI
///
/// Logs go to stderr so stdout stays reserved for command output (e.g.
/// `show --json`).
///
/// The log level can be controlled via the RUST_LOG environment variable:
/// - RUST_LOG=debug bundlecfg check   (verbose logging)
/// - RUST_LOG=warn bundlecfg watch    (reload failures only)
///
/// `--verbose` switches the default to debug when RUST_LOG is unset.
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}
