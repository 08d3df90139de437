use anyhow::{Context, Result};
use bundlecfg_core::{AliasTable, ConfigResolver};
use std::path::Path;

use crate::config;

/// Resolve import specifiers through the config's alias table
///
/// Stops at the first specifier that fails; an unresolved alias aborts just
/// like it would abort a build.
pub fn alias(path: &Path, resolver: &ConfigResolver, specifiers: &[String], probe: bool) -> Result<()> {
    let resolved = config::load_resolved(path, resolver)?;

    for specifier in specifiers {
        let target = resolve_one(resolved.alias_table(), specifier, probe)?;
        println!("{specifier} → {target}");
    }
    Ok(())
}

fn resolve_one(table: &AliasTable, specifier: &str, probe: bool) -> Result<String> {
    if probe {
        let path = table
            .probe(specifier)
            .with_context(|| format!("Failed to resolve '{specifier}'"))?;
        Ok(path.to_string_lossy().into_owned())
    } else {
        table
            .resolve(specifier)
            .with_context(|| format!("Failed to resolve '{specifier}'"))
    }
}
