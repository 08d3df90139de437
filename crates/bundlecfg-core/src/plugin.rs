//! Plugin descriptors and nested resolver options

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Stylesheet format used when a plugin generates style imports for a UI
/// component.
///
/// Accepts `"css"`, `"sass"`, `"none"` or a boolean in raw configuration:
/// `false` disables style imports and `true` selects the default (`css`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "RawImportStyle")]
pub enum ImportStyle {
    /// Import compiled CSS assets
    #[default]
    Css,
    /// Import source style files for further preprocessing
    Sass,
    /// Generate no style imports
    None,
}

impl fmt::Display for ImportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportStyle::Css => write!(f, "css"),
            ImportStyle::Sass => write!(f, "sass"),
            ImportStyle::None => write!(f, "none"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawImportStyle {
    Flag(bool),
    Named(String),
}

impl TryFrom<RawImportStyle> for ImportStyle {
    type Error = String;

    fn try_from(raw: RawImportStyle) -> Result<Self, Self::Error> {
        match raw {
            RawImportStyle::Flag(true) => Ok(ImportStyle::Css),
            RawImportStyle::Flag(false) => Ok(ImportStyle::None),
            RawImportStyle::Named(name) => match name.as_str() {
                "css" => Ok(ImportStyle::Css),
                "sass" => Ok(ImportStyle::Sass),
                "none" => Ok(ImportStyle::None),
                other => Err(format!(
                    "unknown importStyle '{other}', expected one of: css, sass, none"
                )),
            },
        }
    }
}

/// A UI-library resolver that a plugin delegates component/style lookups to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResolverOption {
    pub name: String,

    #[serde(default)]
    pub import_style: ImportStyle,
}

impl ResolverOption {
    pub fn new(name: impl Into<String>, import_style: ImportStyle) -> Self {
        Self {
            name: name.into(),
            import_style,
        }
    }
}

/// Declared form of one plugin entry.
///
/// This is both what configuration files contain and what
/// [`PluginPipeline::to_specs`](crate::PluginPipeline::to_specs) produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginSpec {
    pub name: String,

    /// Disabled entries are dropped from the pipeline as if never declared
    #[serde(default = "enabled_by_default")]
    #[serde(skip_serializing_if = "is_enabled")]
    pub enabled: bool,

    #[serde(default)]
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resolvers: Vec<ResolverOption>,
}

fn enabled_by_default() -> bool {
    true
}

fn is_enabled(enabled: &bool) -> bool {
    *enabled
}

impl PluginSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            options: Map::new(),
            resolvers: Vec::new(),
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    pub fn with_resolver(mut self, resolver: ResolverOption) -> Self {
        self.resolvers.push(resolver);
        self
    }
}

/// One frozen transformation stage of a [`PluginPipeline`](crate::PluginPipeline).
///
/// Fields are read-only once the pipeline is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginDescriptor {
    name: String,
    order: usize,
    options: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    resolvers: Vec<ResolverOption>,
}

impl PluginDescriptor {
    pub(crate) fn from_spec(spec: PluginSpec, order: usize) -> Self {
        Self {
            name: spec.name,
            order,
            options: spec.options,
            resolvers: spec.resolvers,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position among the active stages, starting at zero
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    pub fn resolvers(&self) -> &[ResolverOption] {
        &self.resolvers
    }

    /// Convert back to the declared form
    pub fn to_spec(&self) -> PluginSpec {
        PluginSpec {
            name: self.name.clone(),
            enabled: true,
            options: self.options.clone(),
            resolvers: self.resolvers.clone(),
        }
    }
}
