//! Watch mode
//!
//! Polls the config file and reloads it whenever its contents change. A
//! broken edit is reported and the last good configuration stays active
//! until a corrected version loads.

use anyhow::{Context, Result};
use bundlecfg_core::{ConfigHandle, ConfigResolver, ResolvedConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::config;

use super::check::summary;

/// Result of one poll of the config file
#[derive(Debug)]
pub enum PollOutcome {
    Unchanged,
    Reloaded(Arc<ResolvedConfig>),
    /// The new contents failed to load; the previous config is still active
    Rejected(String),
}

pub struct ConfigWatcher {
    path: PathBuf,
    handle: ConfigHandle,
    last_contents: String,
}

impl ConfigWatcher {
    /// Load the config for the first time
    ///
    /// Fails if the initial load fails, since there is nothing to fall back
    /// on yet.
    pub async fn start(path: &Path, resolver: ConfigResolver) -> Result<Self> {
        let contents = read_contents(path).await?;
        let raw = config::parse_raw(path, &contents)?;
        let handle = ConfigHandle::load(resolver, &raw)
            .with_context(|| format!("Config validation failed in {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            handle,
            last_contents: contents,
        })
    }

    pub fn current(&self) -> Arc<ResolvedConfig> {
        self.handle.current()
    }

    /// Re-read the config file and reload it if it changed
    ///
    /// An unreadable or missing file is rejected like a broken edit, so a
    /// save that replaces the file does not end watch mode.
    pub async fn poll(&mut self) -> PollOutcome {
        let contents = match read_contents(&self.path).await {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("keeping previous configuration: {e:#}");
                return PollOutcome::Rejected(format!("{e:#}"));
            }
        };
        if contents == self.last_contents {
            return PollOutcome::Unchanged;
        }

        let raw = config::parse_raw(&self.path, &contents);
        self.last_contents = contents;
        let raw = match raw {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("keeping previous configuration: {e:#}");
                return PollOutcome::Rejected(format!("{e:#}"));
            }
        };

        match self.handle.reload(&raw) {
            Ok(config) => PollOutcome::Reloaded(config),
            Err(e) => PollOutcome::Rejected(e.to_string()),
        }
    }
}

async fn read_contents(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config: {}", path.display()))
}

/// Run watch mode until Ctrl-C
pub async fn watch(path: &Path, resolver: ConfigResolver, interval: Duration) -> Result<()> {
    let mut watcher = ConfigWatcher::start(path, resolver).await?;

    println!("✓ Watching {}", path.display());
    print!("{}", summary(&watcher.current()));

    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("Stopped watching {}", path.display());
                return Ok(());
            }
            _ = ticker.tick() => {
                match watcher.poll().await {
                    PollOutcome::Unchanged => {}
                    PollOutcome::Reloaded(config) => {
                        println!("✓ Reloaded {}", path.display());
                        print!("{}", summary(&config));
                    }
                    PollOutcome::Rejected(reason) => {
                        println!("✗ Reload failed, keeping previous configuration");
                        println!("  {reason}");
                    }
                }
            }
        }
    }
}
