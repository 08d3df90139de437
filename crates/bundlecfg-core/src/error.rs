use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while turning a raw configuration object into a
/// [`ResolvedConfig`](crate::ResolvedConfig).
///
/// Every variant is fatal for the load that produced it. `at` fields hold
/// the declared location of the offending entry (e.g. `plugins[3][0]`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid configuration at {at}: expected {expected}")]
    InvalidShape { at: String, expected: &'static str },

    #[error("Invalid alias at {at}: {reason}")]
    InvalidAlias { at: String, reason: String },

    #[error("Duplicate alias '{find}' at {at} (first declared at {first})")]
    DuplicateAlias {
        find: String,
        first: String,
        at: String,
    },

    #[error("Invalid plugin config at {at}{}: {reason}", name_suffix(.name))]
    InvalidPluginConfig {
        at: String,
        name: Option<String>,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn plugin(at: impl Into<String>, name: Option<&str>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidPluginConfig {
            at: at.into(),
            name: name.map(str::to_string),
            reason: reason.into(),
        }
    }
}

fn name_suffix(name: &Option<String>) -> String {
    name.as_deref()
        .map(|n| format!(" ('{n}')"))
        .unwrap_or_default()
}

/// Failures raised when a module specifier is resolved against an
/// [`AliasTable`](crate::AliasTable).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AliasError {
    #[error("Unresolved alias: no alias prefix matches '{specifier}'")]
    UnresolvedAlias { specifier: String },

    #[error("Alias root for '{find}' does not exist or is not a directory: {}", .root.display())]
    MissingAliasRoot { find: String, root: PathBuf },
}
