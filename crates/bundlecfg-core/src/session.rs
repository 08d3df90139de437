//! Reload handling for long-running (watch mode) builds
//!
//! A [`ConfigHandle`] always holds the last configuration that loaded
//! successfully. Builds take their own `Arc` snapshot through
//! [`ConfigHandle::current`], so a reload never changes the config an
//! in-flight build is reading.

use serde_json::Value;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::resolver::{ConfigResolver, ResolvedConfig};

#[derive(Debug)]
pub struct ConfigHandle {
    resolver: ConfigResolver,
    current: Arc<ResolvedConfig>,
    generation: u64,
}

impl ConfigHandle {
    /// Perform the initial load; there is no previous config to fall back on
    pub fn load(resolver: ConfigResolver, raw: &Value) -> Result<Self, ConfigError> {
        let config = resolver.load(raw)?;
        Ok(Self {
            resolver,
            current: Arc::new(config),
            generation: 0,
        })
    }

    /// Snapshot of the active configuration
    pub fn current(&self) -> Arc<ResolvedConfig> {
        Arc::clone(&self.current)
    }

    /// Number of successful reloads since the initial load
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Load `raw` and make it the active configuration
    ///
    /// On failure the previous configuration stays active and the error is
    /// returned for reporting.
    pub fn reload(&mut self, raw: &Value) -> Result<Arc<ResolvedConfig>, ConfigError> {
        match self.resolver.load(raw) {
            Ok(config) => {
                self.current = Arc::new(config);
                self.generation += 1;
                tracing::info!(generation = self.generation, "configuration reloaded");
                Ok(self.current())
            }
            Err(e) => {
                tracing::warn!(error = %e, "reload rejected, keeping previous configuration");
                Err(e)
            }
        }
    }
}
