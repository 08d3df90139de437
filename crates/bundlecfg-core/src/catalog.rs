//! Recognized plugins and UI-library resolvers
//!
//! A plugin entry naming anything outside the catalog is rejected at load
//! time, before any build work starts.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Capabilities of a recognized plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PluginKind {
    /// Whether the plugin delegates to nested UI-library resolvers
    #[serde(default)]
    pub accepts_resolvers: bool,
}

/// Set of plugin and resolver names a [`ConfigResolver`](crate::ConfigResolver)
/// will accept.
///
/// Also deserializable, so callers can ship extra entries in a file:
///
/// ```toml
/// resolvers = ["vuetify"]
///
/// [plugins.legacy]
///
/// [plugins.icons]
/// accepts-resolvers = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    plugins: BTreeMap<String, PluginKind>,

    #[serde(default)]
    resolvers: BTreeSet<String>,
}

const BUILTIN_PLUGINS: &[(&str, bool)] = &[
    ("vue", false),
    ("vue-jsx", false),
    ("windicss", false),
    ("components", true),
    ("auto-import", true),
];

const BUILTIN_RESOLVERS: &[&str] = &["element-plus", "ant-design-vue", "naive-ui", "vant"];

impl Default for Catalog {
    fn default() -> Self {
        let mut catalog = Self::empty();
        for (name, accepts_resolvers) in BUILTIN_PLUGINS {
            catalog.register_plugin(*name, *accepts_resolvers);
        }
        for name in BUILTIN_RESOLVERS {
            catalog.register_resolver(*name);
        }
        catalog
    }
}

impl Catalog {
    /// A catalog that recognizes nothing
    pub fn empty() -> Self {
        Self {
            plugins: BTreeMap::new(),
            resolvers: BTreeSet::new(),
        }
    }

    pub fn register_plugin(&mut self, name: impl Into<String>, accepts_resolvers: bool) -> &mut Self {
        self.plugins
            .insert(name.into(), PluginKind { accepts_resolvers });
        self
    }

    pub fn register_resolver(&mut self, name: impl Into<String>) -> &mut Self {
        self.resolvers.insert(name.into());
        self
    }

    /// Add every entry of `other`; on a name clash `other` wins
    pub fn merge(&mut self, other: Catalog) -> &mut Self {
        self.plugins.extend(other.plugins);
        self.resolvers.extend(other.resolvers);
        self
    }

    pub fn plugin(&self, name: &str) -> Option<PluginKind> {
        self.plugins.get(name).copied()
    }

    pub fn is_known_resolver(&self, name: &str) -> bool {
        self.resolvers.contains(name)
    }

    /// Comma-separated plugin names, for diagnostics
    pub fn plugin_names(&self) -> String {
        self.plugins.keys().cloned().collect::<Vec<_>>().join(", ")
    }

    /// Comma-separated resolver names, for diagnostics
    pub fn resolver_names(&self) -> String {
        self.resolvers.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
