//! Configuration file handling for bundlecfg
//!
//! The core library works on in-memory JSON values; this module gets them
//! there from disk.
//!
//! ## Architecture
//!
//! - `paths` - Locating the config file
//! - `io` - Reading and parsing config and catalog files
//! - `utils` - Expanding relative alias roots against the config directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bundlecfg::config;
//! use bundlecfg_core::ConfigResolver;
//!
//! # fn example() -> anyhow::Result<()> {
//! let path = config::locate_config(None)?;
//! let resolved = config::io::load_resolved(&path, &ConfigResolver::new())?;
//! println!("{} stages", resolved.pipeline().len());
//! # Ok(())
//! # }
//! ```

pub mod io;
pub mod paths;
pub mod utils;

// Re-export commonly used items
pub use io::{load_catalog, load_resolved, parse_raw, read_raw, ConfigFormat};
pub use paths::{find_config_file, locate_config, CONFIG_FILE_NAMES};
