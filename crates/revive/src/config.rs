use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up in the project directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".revive.toml";

/// Top-level configuration from `.revive.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which files of a project directory are handed to the analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
}

fn default_extensions() -> Vec<String> {
    [
        "py", "js", "jsx", "ts", "tsx", "html", "css", "scss", "md", "sql", "java", "cpp", "c",
        "go", "rs",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/node_modules/**".to_string(),
        "**/.git/**".to_string(),
        "**/target/**".to_string(),
        "**/venv/**".to_string(),
        "**/__pycache__/**".to_string(),
        "**/dist/**".to_string(),
    ]
}

fn default_max_file_bytes() -> u64 {
    1024 * 1024
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_patterns: default_exclude_patterns(),
            max_file_bytes: default_max_file_bytes(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from a `.revive.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "failed to parse '{}'. Run `revive init` to create a valid config file",
                path.display()
            )
        })?;
        Ok(config)
    }

    /// Load from `.revive.toml` in the given directory or any ancestor, or return defaults.
    pub fn load_or_default(dir: &Path) -> Self {
        let start = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        for current in start.ancestors() {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!(
                            path = %config_path.display(),
                            "failed to load config: {e:#}. Using defaults."
                        );
                        Self::default()
                    }
                };
            }
        }
        Self::default()
    }

    /// Generate default TOML content for `revive init`.
    pub fn default_toml() -> String {
        r#"# Revive - Project Diagnosis Configuration

[discovery]
# Extensions collected from the project directory. Files whose language is not
# recognized still count toward documentation and test detection.
extensions = ["py", "js", "jsx", "ts", "tsx", "html", "css", "scss", "md", "sql", "java", "cpp", "c", "go", "rs"]
exclude_patterns = ["**/node_modules/**", "**/.git/**", "**/target/**", "**/venv/**", "**/__pycache__/**", "**/dist/**"]
# Larger files are skipped.
max_file_bytes = 1048576

[output]
# "text" or "json"
format = "text"
"#
        .to_string()
    }
}
