//! Config and catalog file I/O
//!
//! Files are parsed by extension (`.json` or `.toml`) into a JSON value,
//! alias roots are expanded against the file's directory, and the result is
//! handed to the core resolver.

use anyhow::{Context, Result};
use bundlecfg_core::{Catalog, ConfigResolver, ResolvedConfig};
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::utils;

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => anyhow::bail!(
                "unsupported config format: '{}' (expected a .json or .toml file)",
                path.display()
            ),
        }
    }

    pub fn parse(self, content: &str) -> Result<Value> {
        match self {
            ConfigFormat::Json => serde_json::from_str(content).context("invalid JSON"),
            ConfigFormat::Toml => toml::from_str(content).context("invalid TOML"),
        }
    }
}

/// Read a config file into its raw form with alias roots made absolute
pub fn read_raw(path: &Path) -> Result<Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path.display()))?;
    parse_raw(path, &content)
}

/// Parse config `content` already read from `path`
///
/// `path` selects the format and the directory alias roots are expanded
/// against.
pub fn parse_raw(path: &Path, content: &str) -> Result<Value> {
    let format = ConfigFormat::from_path(path)?;
    let mut raw = format
        .parse(content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;

    let base_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let base_dir = if base_dir.is_absolute() {
        base_dir.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to determine current directory")?
            .join(base_dir)
    };
    utils::expand_alias_roots(&mut raw, &base_dir)?;

    tracing::debug!(path = %path.display(), ?format, "read config file");
    Ok(raw)
}

/// Read and resolve a config file
pub fn load_resolved(path: &Path, resolver: &ConfigResolver) -> Result<ResolvedConfig> {
    let raw = read_raw(path)?;
    resolver
        .load(&raw)
        .with_context(|| format!("Config validation failed in {}", path.display()))
}

/// Built-in catalog, extended with the entries of `extra` when given
pub fn load_catalog(extra: Option<&Path>) -> Result<Catalog> {
    let mut catalog = Catalog::default();

    if let Some(path) = extra {
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let raw = format
            .parse(&content)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
        let additions: Catalog = serde_json::from_value(raw)
            .with_context(|| format!("Invalid catalog: {}", path.display()))?;

        catalog.merge(additions);
        tracing::debug!(path = %path.display(), "merged plugin catalog");
    }

    Ok(catalog)
}
