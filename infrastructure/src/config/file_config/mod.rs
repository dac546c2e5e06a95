//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod repl;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotebook_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[output]
format = "markdown"
color = false

[repl]
prompt = "> "
history_file = "~/.quotes_history"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Markdown));
        assert!(!config.output.color);
        assert_eq!(config.repl.prompt, "> ");
        assert_eq!(
            config.repl.history_file.as_deref(),
            Some("~/.quotes_history")
        );
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let toml_str = r#"
[output]
format = "yaml"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }
}
