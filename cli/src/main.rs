// Use modules from the library crate
use bundlecfg::{commands, config, logging};

use anyhow::Result;
use bundlecfg_core::ConfigResolver;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "bundlecfg",
    about = "Validate and inspect declarative bundler configuration",
    version = bundlecfg::VERSION
)]
struct Cli {
    /// Config file (.json or .toml)
    ///
    /// Defaults to the nearest bundle.config.json or bundle.config.toml in
    /// the current directory or any parent.
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Extra plugin/resolver catalog merged over the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Validate the config and print a summary
    Check,

    /// Print the resolved alias table and plugin pipeline
    Show {
        /// Print the normalized configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve import specifiers through the alias table
    ///
    /// Examples:
    ///   bundlecfg alias @/components/Foo.vue
    ///   bundlecfg alias --probe @/App.vue ~/assets/logo.png
    Alias {
        /// Specifiers to resolve (e.g. @/components/Foo.vue)
        #[arg(required = true)]
        specifiers: Vec<String>,

        /// Also check that each matched alias root exists on disk
        #[arg(long)]
        probe: bool,
    },

    /// Reload the config whenever it changes, keeping the last good one
    Watch {
        /// Poll interval in milliseconds
        #[arg(long, default_value_t = 500, value_name = "MS")]
        interval_ms: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let path = config::locate_config(cli.config.as_deref())?;
    let catalog = config::load_catalog(cli.catalog.as_deref())?;
    let resolver = ConfigResolver::with_catalog(catalog);
    tracing::debug!(path = %path.display(), "using config file");

    match cli.command {
        Command::Check => commands::check::check(&path, &resolver),
        Command::Show { json } => commands::show::show(&path, &resolver, json),
        Command::Alias { specifiers, probe } => {
            commands::alias::alias(&path, &resolver, &specifiers, probe)
        }
        Command::Watch { interval_ms } => {
            if interval_ms == 0 {
                anyhow::bail!("--interval-ms must be greater than zero");
            }
            commands::watch::watch(&path, resolver, Duration::from_millis(interval_ms)).await
        }
    }
}
