use anyhow::Result;
use bundlecfg_core::{ConfigResolver, ResolvedConfig};
use std::path::Path;

use crate::config;

/// Validate a config file and print a short summary
pub fn check(path: &Path, resolver: &ConfigResolver) -> Result<()> {
    let resolved = config::load_resolved(path, resolver)?;

    println!("✓ {} is valid", path.display());
    print!("{}", summary(&resolved));
    Ok(())
}

/// Indented summary lines for a resolved config
pub(crate) fn summary(resolved: &ResolvedConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("  Aliases: {}\n", resolved.alias_table().len()));

    let pipeline = resolved.pipeline();
    if pipeline.is_empty() {
        out.push_str("  Plugins: (none)\n");
    } else {
        out.push_str(&format!(
            "  Plugins: {} ({})\n",
            pipeline.len(),
            pipeline.names().join(" → ")
        ));
    }

    if !resolved.passthrough().is_empty() {
        let keys: Vec<_> = resolved.passthrough().keys().map(String::as_str).collect();
        out.push_str(&format!("  Passed through: {}\n", keys.join(", ")));
    }
    out
}
