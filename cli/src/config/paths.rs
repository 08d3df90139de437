//! Config file discovery
//!
//! Without an explicit path, the CLI walks up from the working directory
//! and uses the first directory containing one of [`CONFIG_FILE_NAMES`].

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File names probed in each directory, in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &["bundle.config.json", "bundle.config.toml"];

/// Walk up directories from `start` looking for a config file
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_dir() {
        start.to_path_buf()
    } else {
        start.parent()?.to_path_buf()
    };

    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Resolve the config file to use
///
/// An explicit path must exist. Otherwise the search starts at the current
/// working directory.
pub fn locate_config(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.is_file() {
            anyhow::bail!("config file '{}' does not exist", path.display());
        }
        return Ok(path.to_path_buf());
    }

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    find_config_file(&cwd).with_context(|| {
        format!(
            "no config file found in '{}' or any parent directory (looked for {})",
            cwd.display(),
            CONFIG_FILE_NAMES.join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_in_start_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bundle.config.json");
        fs::write(&file, "{}").unwrap();

        assert_eq!(find_config_file(dir.path()), Some(file));
    }

    #[test]
    fn test_find_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bundle.config.toml");
        fs::write(&file, "").unwrap();
        let nested = dir.path().join("src").join("components");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config_file(&nested), Some(file));
    }

    #[test]
    fn test_json_preferred_over_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bundle.config.toml"), "").unwrap();
        fs::write(dir.path().join("bundle.config.json"), "{}").unwrap();

        assert_eq!(
            find_config_file(dir.path()),
            Some(dir.path().join("bundle.config.json"))
        );
    }

    #[test]
    fn test_start_may_be_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bundle.config.json");
        fs::write(&file, "{}").unwrap();
        let main = dir.path().join("main.ts");
        fs::write(&main, "").unwrap();

        assert_eq!(find_config_file(&main), Some(file));
    }

    #[test]
    fn test_locate_explicit_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let err = locate_config(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_locate_explicit_existing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("custom.json");
        fs::write(&file, "{}").unwrap();

        assert_eq!(locate_config(Some(&file)).unwrap(), file);
    }
}
