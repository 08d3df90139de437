//! Build configuration resolution
//!
//! Turns a declarative bundler configuration object into an immutable
//! [`ResolvedConfig`]: an [`AliasTable`] for symbolic import prefixes and an
//! ordered [`PluginPipeline`] of transformation stages.
//!
//! ```
//! use bundlecfg_core::{ConfigResolver, ImportStyle};
//! use serde_json::json;
//!
//! let config = ConfigResolver::new()
//!     .load(&json!({
//!         "resolve": { "alias": [{ "find": "@", "replacement": "/proj/src" }] },
//!         "plugins": [
//!             { "name": "vue" },
//!             { "name": "components",
//!               "resolvers": [{ "name": "element-plus", "importStyle": "sass" }] }
//!         ]
//!     }))
//!     .unwrap();
//!
//! assert_eq!(config.resolve("@/App.vue").unwrap(), "/proj/src/App.vue");
//! assert_eq!(config.pipeline().names(), vec!["vue", "components"]);
//! assert_eq!(
//!     config.pipeline().get(1).unwrap().resolvers()[0].import_style,
//!     ImportStyle::Sass
//! );
//! ```

pub mod alias;
pub mod catalog;
pub mod error;
pub mod pipeline;
pub mod plugin;
pub mod resolver;
pub mod session;

pub use alias::{AliasEntry, AliasTable};
pub use catalog::{Catalog, PluginKind};
pub use error::{AliasError, ConfigError};
pub use pipeline::{PipelineBuilder, PluginPipeline};
pub use plugin::{ImportStyle, PluginDescriptor, PluginSpec, ResolverOption};
pub use resolver::{ConfigResolver, ResolvedConfig};
pub use session::ConfigHandle;
