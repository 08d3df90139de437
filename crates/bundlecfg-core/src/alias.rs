//! Path alias table
//!
//! Maps symbolic import prefixes (`@`, `~assets`, ...) to absolute
//! filesystem roots. The table is validated once at load time and is a pure
//! lookup afterwards; the only filesystem access is the explicit
//! [`AliasTable::probe`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{AliasError, ConfigError};

/// A single `find` → `replacement` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasEntry {
    /// Symbolic prefix matched against the start of an import specifier
    pub find: String,

    /// Absolute root substituted for `find`
    pub replacement: String,
}

impl AliasEntry {
    pub fn new(find: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replacement: replacement.into(),
        }
    }

    /// Whether this entry's prefix applies to `specifier`
    ///
    /// The prefix must match a whole leading path segment: `@` matches `@`
    /// and `@/foo`, but not `@vue/shared`.
    pub fn matches(&self, specifier: &str) -> bool {
        match specifier.strip_prefix(self.find.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || self.find.ends_with('/'),
            None => false,
        }
    }
}

/// Ordered, duplicate-free set of alias entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    /// Build a table from entries in declaration order
    ///
    /// Fails on an empty `find`, a non-absolute `replacement`, or a `find`
    /// prefix declared twice.
    pub fn new(entries: Vec<AliasEntry>) -> Result<Self, ConfigError> {
        let declared = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| (format!("alias[{i}]"), entry))
            .collect();
        Self::from_declared(declared)
    }

    /// Build a table from entries tagged with their declared location.
    pub(crate) fn from_declared(declared: Vec<(String, AliasEntry)>) -> Result<Self, ConfigError> {
        let mut first_seen: HashMap<String, String> = HashMap::new();
        let mut entries = Vec::with_capacity(declared.len());

        for (at, entry) in declared {
            if entry.find.is_empty() {
                return Err(ConfigError::InvalidAlias {
                    at,
                    reason: "'find' must not be empty".to_string(),
                });
            }
            if !is_absolute(&entry.replacement) {
                return Err(ConfigError::InvalidAlias {
                    at,
                    reason: format!(
                        "replacement '{}' for '{}' is not an absolute path",
                        entry.replacement, entry.find
                    ),
                });
            }
            if let Some(first) = first_seen.get(&entry.find) {
                return Err(ConfigError::DuplicateAlias {
                    find: entry.find,
                    first: first.clone(),
                    at,
                });
            }

            tracing::debug!(find = %entry.find, replacement = %entry.replacement, "registered alias");
            first_seen.insert(entry.find.clone(), at);
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry that applies to `specifier`
    ///
    /// Longest `find` wins; among equally long prefixes the first declared
    /// entry wins.
    pub fn lookup(&self, specifier: &str) -> Option<&AliasEntry> {
        let mut best: Option<&AliasEntry> = None;
        for entry in &self.entries {
            if !entry.matches(specifier) {
                continue;
            }
            if best.is_none_or(|b| entry.find.len() > b.find.len()) {
                best = Some(entry);
            }
        }
        best
    }

    /// Rewrite `specifier` to an absolute path
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlecfg_core::{AliasEntry, AliasTable};
    ///
    /// let table = AliasTable::new(vec![AliasEntry::new("@", "/proj/src")]).unwrap();
    /// assert_eq!(
    ///     table.resolve("@/components/Foo.vue").unwrap(),
    ///     "/proj/src/components/Foo.vue"
    /// );
    /// ```
    pub fn resolve(&self, specifier: &str) -> Result<String, AliasError> {
        let entry = self.matched(specifier)?;
        Ok(join_root(&entry.replacement, &specifier[entry.find.len()..]))
    }

    /// Resolve `specifier` and verify the matched alias root exists
    ///
    /// The check targets the replacement root, not the final file; whether
    /// the module itself exists is up to the build engine.
    pub fn probe(&self, specifier: &str) -> Result<PathBuf, AliasError> {
        let entry = self.matched(specifier)?;
        let root = Path::new(&entry.replacement);
        if !root.is_dir() {
            return Err(AliasError::MissingAliasRoot {
                find: entry.find.clone(),
                root: root.to_path_buf(),
            });
        }
        Ok(PathBuf::from(join_root(
            &entry.replacement,
            &specifier[entry.find.len()..],
        )))
    }

    fn matched(&self, specifier: &str) -> Result<&AliasEntry, AliasError> {
        self.lookup(specifier)
            .ok_or_else(|| AliasError::UnresolvedAlias {
                specifier: specifier.to_string(),
            })
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || Path::new(path).is_absolute()
}

/// Join a replacement root and the remainder of a specifier with exactly
/// one separator.
fn join_root(root: &str, rest: &str) -> String {
    let trimmed = root.trim_end_matches('/');
    let rest = rest.trim_start_matches('/');

    match (trimmed.is_empty(), rest.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{rest}"),
        (false, true) => trimmed.to_string(),
        (false, false) => format!("{trimmed}/{rest}"),
    }
}
