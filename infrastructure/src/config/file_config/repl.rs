//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Prompt shown before each input line
    pub prompt: String,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            prompt: "quote> ".to_string(),
            history_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repl_defaults_fill_missing_fields() {
        let toml_str = r#"
[repl]
history_file = "/tmp/quotes.txt"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.repl.prompt, FileReplConfig::default().prompt);
        assert_eq!(config.repl.history_file.as_deref(), Some("/tmp/quotes.txt"));
    }
}
