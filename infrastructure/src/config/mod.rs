//! Configuration file loading for quotebook
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./quotebook.toml` or `./.quotebook.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/quotebook/config.toml`
//! 4. Fallback: `~/.config/quotebook/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileOutputConfig, FileOutputFormat, FileReplConfig};
pub use loader::ConfigLoader;
