//! Ordered plugin pipeline
//!
//! Stages run in declaration order and each one observes the module graph
//! as transformed by every earlier stage, so the pipeline keeps strict
//! insertion order. Stages are appended while the pipeline is built and the
//! result is frozen; there is no reordering or removal API.
//!
//! ## Raw plugin lists
//!
//! A raw `plugins` value is a list whose entries are plugin objects, nested
//! lists (groups, flattened in place) or inert `null`/`false` values:
//!
//! ```text
//! [ vue, null, [components, auto-import], {windicss, enabled: false} ]
//!   → vue, components, auto-import
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::Catalog;
use crate::error::ConfigError;
use crate::plugin::{PluginDescriptor, PluginSpec};

/// Frozen, ordered sequence of plugin stages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PluginPipeline {
    stages: Vec<PluginDescriptor>,
}

impl PluginPipeline {
    /// Build a pipeline from declared specs, in order
    ///
    /// Disabled specs are skipped. Every remaining spec is checked against
    /// `catalog`.
    pub fn build(specs: Vec<PluginSpec>, catalog: &Catalog) -> Result<Self, ConfigError> {
        let mut builder = PipelineBuilder::new(catalog);
        for (i, spec) in specs.into_iter().enumerate() {
            builder.push(&format!("plugins[{i}]"), spec)?;
        }
        Ok(builder.finish())
    }

    /// Build a pipeline from a raw `plugins` value located at `at`
    pub(crate) fn from_raw(raw: &Value, at: &str, catalog: &Catalog) -> Result<Self, ConfigError> {
        let Value::Array(entries) = raw else {
            return Err(ConfigError::InvalidShape {
                at: at.to_string(),
                expected: "a list of plugin entries",
            });
        };

        let mut builder = PipelineBuilder::new(catalog);
        for (i, entry) in entries.iter().enumerate() {
            push_raw(&mut builder, entry, format!("{at}[{i}]"))?;
        }
        Ok(builder.finish())
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stages(&self) -> &[PluginDescriptor] {
        &self.stages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PluginDescriptor> {
        self.stages.iter()
    }

    pub fn get(&self, order: usize) -> Option<&PluginDescriptor> {
        self.stages.get(order)
    }

    /// First stage named `name`
    pub fn find(&self, name: &str) -> Option<&PluginDescriptor> {
        self.stages.iter().find(|stage| stage.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.stages.iter().map(PluginDescriptor::name).collect()
    }

    /// Declared form of every stage, in pipeline order
    ///
    /// Building a pipeline from the returned specs reproduces this one.
    pub fn to_specs(&self) -> Vec<PluginSpec> {
        self.stages.iter().map(PluginDescriptor::to_spec).collect()
    }
}

impl<'a> IntoIterator for &'a PluginPipeline {
    type Item = &'a PluginDescriptor;
    type IntoIter = std::slice::Iter<'a, PluginDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}

/// Append-only builder for a [`PluginPipeline`].
pub struct PipelineBuilder<'c> {
    catalog: &'c Catalog,
    stages: Vec<PluginDescriptor>,
}

impl<'c> PipelineBuilder<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            stages: Vec::new(),
        }
    }

    /// Validate `spec` and append it as the next stage
    ///
    /// `at` names the declared location and is only used in errors. A
    /// disabled spec is skipped without validation.
    pub fn push(&mut self, at: &str, spec: PluginSpec) -> Result<&mut Self, ConfigError> {
        if !spec.enabled {
            tracing::debug!(plugin = %spec.name, at, "skipping disabled plugin");
            return Ok(self);
        }

        validate(&spec, at, self.catalog)?;

        let order = self.stages.len();
        tracing::debug!(plugin = %spec.name, order, "added pipeline stage");
        self.stages.push(PluginDescriptor::from_spec(spec, order));
        Ok(self)
    }

    pub fn finish(self) -> PluginPipeline {
        PluginPipeline {
            stages: self.stages,
        }
    }
}

fn push_raw(builder: &mut PipelineBuilder<'_>, entry: &Value, at: String) -> Result<(), ConfigError> {
    match entry {
        Value::Null | Value::Bool(false) => {
            tracing::debug!(at = %at, "skipping inert plugin entry");
            Ok(())
        }
        Value::Array(group) => {
            for (i, nested) in group.iter().enumerate() {
                push_raw(builder, nested, format!("{at}[{i}]"))?;
            }
            Ok(())
        }
        Value::Object(fields) => {
            let name = fields.get("name").and_then(Value::as_str);
            if fields.get("enabled") == Some(&Value::Bool(false)) {
                tracing::debug!(plugin = name, at = %at, "skipping disabled plugin");
                return Ok(());
            }
            let spec = PluginSpec::deserialize(entry)
                .map_err(|e| ConfigError::plugin(&at, name, e.to_string()))?;
            builder.push(&at, spec)?;
            Ok(())
        }
        other => Err(ConfigError::plugin(
            &at,
            None,
            format!(
                "expected a plugin object, a list of plugins, null or false, found {}",
                kind_of(other)
            ),
        )),
    }
}

fn validate(spec: &PluginSpec, at: &str, catalog: &Catalog) -> Result<(), ConfigError> {
    let name = spec.name.as_str();
    if name.is_empty() {
        return Err(ConfigError::plugin(at, None, "plugin name must not be empty"));
    }

    let kind = catalog.plugin(name).ok_or_else(|| {
        ConfigError::plugin(
            at,
            Some(name),
            format!("unknown plugin, expected one of: {}", catalog.plugin_names()),
        )
    })?;

    if !spec.resolvers.is_empty() && !kind.accepts_resolvers {
        return Err(ConfigError::plugin(
            at,
            Some(name),
            "plugin does not accept nested resolvers",
        ));
    }

    for (i, resolver) in spec.resolvers.iter().enumerate() {
        if !catalog.is_known_resolver(&resolver.name) {
            return Err(ConfigError::plugin(
                format!("{at}.resolvers[{i}]"),
                Some(name),
                format!(
                    "unknown resolver '{}', expected one of: {}",
                    resolver.name,
                    catalog.resolver_names()
                ),
            ));
        }
    }

    Ok(())
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
