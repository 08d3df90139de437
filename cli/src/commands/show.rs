use anyhow::{Context, Result};
use bundlecfg_core::{ConfigResolver, PluginDescriptor, ResolvedConfig};
use std::path::Path;

use crate::config;

/// Print the alias table and plugin pipeline of a config file
///
/// With `json`, prints the normalized configuration instead, which loads
/// back to the same pipeline.
pub fn show(path: &Path, resolver: &ConfigResolver, json: bool) -> Result<()> {
    let resolved = config::load_resolved(path, resolver)?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&resolved).context("Failed to serialize config")?;
        println!("{rendered}");
    } else {
        print!("{}", render(&resolved));
    }
    Ok(())
}

pub(crate) fn render(resolved: &ResolvedConfig) -> String {
    let mut out = String::from("Aliases:\n");
    if resolved.alias_table().is_empty() {
        out.push_str("  (none)\n");
    }
    for entry in resolved.alias_table().entries() {
        out.push_str(&format!("  {} → {}\n", entry.find, entry.replacement));
    }

    out.push_str("Pipeline:\n");
    if resolved.pipeline().is_empty() {
        out.push_str("  (none)\n");
    }
    for stage in resolved.pipeline() {
        out.push_str(&render_stage(stage));
    }
    out
}

fn render_stage(stage: &PluginDescriptor) -> String {
    let mut line = format!("  {}. {}", stage.order(), stage.name());

    if !stage.resolvers().is_empty() {
        let resolvers: Vec<_> = stage
            .resolvers()
            .iter()
            .map(|r| format!("{}: {}", r.name, r.import_style))
            .collect();
        line.push_str(&format!("  [{}]", resolvers.join(", ")));
    }
    line.push('\n');

    if !stage.options().is_empty() {
        let options = serde_json::Value::Object(stage.options().clone());
        line.push_str(&format!("     options: {options}\n"));
    }
    line
}
