// Core configuration types
mod loader;

pub use loader::{directory_ancestors, load_config, load_config_from, parse_and_validate_config};

use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".apisig.toml";

/// Root configuration structure for apisig
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApisigConfig {
    /// Input file selection
    #[serde(default)]
    pub input: InputConfig,

    /// Parser behavior
    #[serde(default)]
    pub parse: ParseConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct InputConfig {
    /// Glob patterns for files to leave out
    #[serde(default)]
    pub ignore: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ParseConfig {
    /// Reject files with syntax errors
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Golden file used by `check` when none is given on the command line
    #[serde(default)]
    pub golden: Option<PathBuf>,
}

/// Contents written by `apisig init`
pub const DEFAULT_CONFIG: &str = r#"# apisig configuration

[input]
ignore = [
    "**/node_modules/**",
    "**/*.spec.ts",
    "**/*.test.ts",
]

[parse]
strict = false

[output]
format = "text"
golden = "api.golden"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.input.ignore.len(), 3);
        assert!(!config.parse.strict);
        assert_eq!(config.output.format, Some(OutputFormat::Text));
        assert_eq!(config.output.golden, Some(PathBuf::from("api.golden")));
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(
            parse_and_validate_config("").unwrap(),
            ApisigConfig::default()
        );
    }
}
