//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "quotebook";
const PROJECT_FILENAMES: [&str; 2] = ["quotebook.toml", ".quotebook.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./quotebook.toml` or `./.quotebook.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/quotebook/config.toml`
    /// 4. Fallback: `~/.config/quotebook/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new("."),
            config_path.map(PathBuf::as_path),
        )
    }

    /// Merge the given sources; missing files are skipped, except an explicit path.
    fn load_from(
        global_path: Option<&Path>,
        project_dir: &Path,
        config_path: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global_path
            && global_path.exists()
        {
            debug!("Loading global config: {}", global_path.display());
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(path) = Self::find_project_config(project_dir) {
            debug!("Loading project config: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            debug!("Loading explicit config: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/quotebook/config.toml if set,
    /// otherwise falls back to ~/.config/quotebook/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::find_project_config(Path::new("."))
    }

    fn find_project_config(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILENAMES
            .iter()
            .map(|filename| dir.join(filename))
            .find(|path| path.exists())
    }

    /// Default location of the REPL history file
    pub fn default_history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join("history.txt"))
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        print!(
            "{}",
            Self::describe_sources(
                config_path.map(PathBuf::as_path),
                Self::project_config_path().as_deref(),
                Self::global_config_path().as_deref(),
            )
        );
    }

    fn describe_sources(
        config_path: Option<&Path>,
        project_path: Option<&Path>,
        global_path: Option<&Path>,
    ) -> String {
        let mut out = String::from("Configuration sources (in priority order):\n");

        if let Some(path) = config_path {
            let status = if path.exists() { "FOUND" } else { "MISSING" };
            out.push_str(&format!("  [{:<7}] Explicit: {}\n", status, path.display()));
        }

        match project_path {
            Some(path) => out.push_str(&format!("  [FOUND  ] Project:  {}\n", path.display())),
            None => out.push_str("  [       ] Project:  ./quotebook.toml or ./.quotebook.toml\n"),
        }

        if let Some(path) = global_path {
            let status = if path.exists() { "FOUND" } else { "" };
            out.push_str(&format!("  [{:<7}] Global:   {}\n", status, path.display()));
        }

        out.push_str("  [       ] Default:  built-in defaults\n");
        out
    }
}
