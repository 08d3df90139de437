//! Configuration resolution entry point
//!
//! [`ConfigResolver::load`] validates a raw configuration object and turns
//! it into an immutable [`ResolvedConfig`]:
//!
//! ```text
//! raw object ──► shape check ──► resolve.alias ──► AliasTable
//!                     │
//!                     └────────► plugins ──────► PluginPipeline
//!                     │
//!                     └────────► other keys ───► passthrough (opaque)
//! ```
//!
//! Loading is synchronous and deterministic. Every failure is a
//! configuration error and is returned as-is; nothing is retried.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::alias::{AliasEntry, AliasTable};
use crate::catalog::Catalog;
use crate::error::{AliasError, ConfigError};
use crate::pipeline::{kind_of, PluginPipeline};
use crate::plugin::PluginSpec;

const RESOLVE_KEY: &str = "resolve";
const ALIAS_KEY: &str = "alias";
const PLUGINS_KEY: &str = "plugins";

/// Validates raw configuration objects against a [`Catalog`].
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    catalog: Catalog,
}

impl ConfigResolver {
    /// Resolver recognizing the built-in plugins and resolvers
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validate `raw` and build a fresh [`ResolvedConfig`]
    ///
    /// Unknown top-level keys, and unknown keys under `resolve`, are kept
    /// verbatim for the build engine instead of being rejected.
    pub fn load(&self, raw: &Value) -> Result<ResolvedConfig, ConfigError> {
        let Value::Object(top) = raw else {
            return Err(ConfigError::InvalidShape {
                at: "<root>".to_string(),
                expected: "an object",
            });
        };

        let mut passthrough = Map::new();
        let mut resolve_passthrough = Map::new();
        let mut alias_table = AliasTable::default();
        let mut pipeline = PluginPipeline::default();

        for (key, value) in top {
            match key.as_str() {
                RESOLVE_KEY => {
                    let (table, rest) = load_resolve_section(value)?;
                    alias_table = table;
                    resolve_passthrough = rest;
                }
                PLUGINS_KEY => {
                    if !value.is_null() {
                        pipeline = PluginPipeline::from_raw(value, PLUGINS_KEY, &self.catalog)?;
                    }
                }
                _ => {
                    tracing::debug!(key = %key, "passing through unrecognized option");
                    passthrough.insert(key.clone(), value.clone());
                }
            }
        }

        tracing::info!(
            aliases = alias_table.len(),
            stages = pipeline.len(),
            "resolved build configuration"
        );

        Ok(ResolvedConfig {
            alias_table,
            pipeline,
            resolve_passthrough,
            passthrough,
        })
    }
}

fn load_resolve_section(value: &Value) -> Result<(AliasTable, Map<String, Value>), ConfigError> {
    let section = match value {
        Value::Null => return Ok((AliasTable::default(), Map::new())),
        Value::Object(section) => section,
        _ => {
            return Err(ConfigError::InvalidShape {
                at: RESOLVE_KEY.to_string(),
                expected: "an object",
            })
        }
    };

    let mut table = AliasTable::default();
    let mut rest = Map::new();
    for (key, value) in section {
        if key == ALIAS_KEY {
            table = AliasTable::from_declared(declared_aliases(value)?)?;
        } else {
            rest.insert(key.clone(), value.clone());
        }
    }
    Ok((table, rest))
}

/// Collect alias entries from either the list form
/// (`[{ find, replacement }]`) or the map form (`{ find: replacement }`).
fn declared_aliases(value: &Value) -> Result<Vec<(String, AliasEntry)>, ConfigError> {
    let base = format!("{RESOLVE_KEY}.{ALIAS_KEY}");

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let at = format!("{base}[{i}]");
                AliasEntry::deserialize(item)
                    .map(|entry| (at.clone(), entry))
                    .map_err(|e| ConfigError::InvalidAlias {
                        at,
                        reason: e.to_string(),
                    })
            })
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(find, replacement)| {
                let at = format!("{base}.{find}");
                match replacement {
                    Value::String(r) => Ok((at, AliasEntry::new(find.clone(), r.clone()))),
                    other => Err(ConfigError::InvalidAlias {
                        at,
                        reason: format!("replacement must be a string, found {}", kind_of(other)),
                    }),
                }
            })
            .collect(),
        _ => Err(ConfigError::InvalidShape {
            at: base,
            expected: "a list of { find, replacement } entries or a map of find to replacement",
        }),
    }
}

/// Validated configuration for one build invocation.
///
/// Owns its alias table and pipeline exclusively and exposes them only as
/// read-only views. A reload produces a new value rather than mutating this
/// one.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    alias_table: AliasTable,
    pipeline: PluginPipeline,
    resolve_passthrough: Map<String, Value>,
    passthrough: Map<String, Value>,
}

impl ResolvedConfig {
    pub fn alias_table(&self) -> &AliasTable {
        &self.alias_table
    }

    pub fn pipeline(&self) -> &PluginPipeline {
        &self.pipeline
    }

    /// Top-level keys the resolver does not interpret
    pub fn passthrough(&self) -> &Map<String, Value> {
        &self.passthrough
    }

    /// Keys under `resolve` other than `alias`
    pub fn resolve_passthrough(&self) -> &Map<String, Value> {
        &self.resolve_passthrough
    }

    /// Shorthand for `alias_table().resolve(specifier)`
    pub fn resolve(&self, specifier: &str) -> Result<String, AliasError> {
        self.alias_table.resolve(specifier)
    }

    /// Normalized raw form
    ///
    /// Aliases use the list form, plugin groups are flattened, inert and
    /// disabled entries are gone. Loading the result again yields an equal
    /// config.
    pub fn to_raw(&self) -> Value {
        let mut resolve = Map::new();
        resolve.insert(
            ALIAS_KEY.to_string(),
            Value::Array(self.alias_table.entries().iter().map(alias_value).collect()),
        );
        resolve.extend(self.resolve_passthrough.clone());

        let mut top = Map::new();
        top.insert(RESOLVE_KEY.to_string(), Value::Object(resolve));
        top.insert(
            PLUGINS_KEY.to_string(),
            Value::Array(self.pipeline.to_specs().iter().map(plugin_value).collect()),
        );
        top.extend(self.passthrough.clone());
        Value::Object(top)
    }
}

fn alias_value(entry: &AliasEntry) -> Value {
    let mut fields = Map::new();
    fields.insert("find".to_string(), Value::String(entry.find.clone()));
    fields.insert("replacement".to_string(), Value::String(entry.replacement.clone()));
    Value::Object(fields)
}

/// Same shape as `PluginSpec`'s serde form: defaults are omitted.
fn plugin_value(spec: &PluginSpec) -> Value {
    let mut fields = Map::new();
    fields.insert("name".to_string(), Value::String(spec.name.clone()));
    if !spec.enabled {
        fields.insert("enabled".to_string(), Value::Bool(false));
    }
    if !spec.options.is_empty() {
        fields.insert("options".to_string(), Value::Object(spec.options.clone()));
    }
    if !spec.resolvers.is_empty() {
        let resolvers = spec
            .resolvers
            .iter()
            .map(|resolver| {
                let mut option = Map::new();
                option.insert("name".to_string(), Value::String(resolver.name.clone()));
                option.insert(
                    "importStyle".to_string(),
                    Value::String(resolver.import_style.to_string()),
                );
                Value::Object(option)
            })
            .collect();
        fields.insert("resolvers".to_string(), Value::Array(resolvers));
    }
    Value::Object(fields)
}

impl Serialize for ResolvedConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}
