//! Alias root expansion
//!
//! Config files name alias roots the way a bundler config does with
//! `resolve(__dirname, 'src/')`: relative to the file itself. The core
//! resolver only accepts absolute roots, so replacements are expanded
//! before loading:
//!
//! ```text
//! "/abs/src"   → unchanged
//! "~/shared"   → $HOME/shared
//! "./src/"     → <config dir>/src
//! "../lib"     → <parent of config dir>/lib
//! ```
//!
//! Expansion is purely lexical; nothing is canonicalized and roots are not
//! required to exist yet.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Component, Path, PathBuf};

/// Expand a single alias replacement against `base_dir`
pub fn expand_replacement(replacement: &str, base_dir: &Path) -> Result<String> {
    if replacement.starts_with('/') || Path::new(replacement).is_absolute() {
        return Ok(replacement.to_string());
    }

    let path = if let Some(stripped) = replacement.strip_prefix("~/") {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE")) // Windows fallback
            .context("cannot determine home directory")?;
        PathBuf::from(home).join(stripped)
    } else {
        base_dir.join(replacement)
    };

    Ok(normalize(&path).to_string_lossy().into_owned())
}

/// Rewrite every alias replacement in a raw config to an absolute path
///
/// Handles both the list form and the map form of `resolve.alias`. Values
/// of the wrong type are left alone for the resolver to report.
pub fn expand_alias_roots(raw: &mut Value, base_dir: &Path) -> Result<()> {
    let Some(alias) = raw.pointer_mut("/resolve/alias") else {
        return Ok(());
    };

    match alias {
        Value::Array(entries) => {
            for entry in entries {
                if let Some(Value::String(replacement)) = entry.get_mut("replacement") {
                    *replacement = expand_replacement(replacement, base_dir)?;
                }
            }
        }
        Value::Object(map) => {
            for replacement in map.values_mut() {
                if let Value::String(r) = replacement {
                    *r = expand_replacement(r, base_dir)?;
                }
            }
        }
        _ => {}
    }
    Ok(())
}

/// Remove `.` and resolve `..` components without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
