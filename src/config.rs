use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub examples: ExamplesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub packages: PackagesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExamplesConfig {
    #[serde(default = "default_examples_root")]
    pub root: PathBuf,
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl Default for ExamplesConfig {
    fn default() -> Self {
        Self {
            root: default_examples_root(),
            follow_symlinks: false,
        }
    }
}

fn default_examples_root() -> PathBuf {
    PathBuf::from("core/rastion/decision_model_package/examples")
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    /// Where `build` writes the catalog JSON. Stdout when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PackagesConfig {
    /// Registry fixture to load instead of the built-in one.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Built-in defaults, used when no config file is present.
    pub fn minimal() -> Self {
        Self::default()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    if config.examples.root.as_os_str().is_empty() {
        anyhow::bail!("examples.root must not be empty");
    }

    if let Some(path) = &config.output.catalog {
        if path.as_os_str().is_empty() {
            anyhow::bail!("output.catalog must not be empty when set");
        }
    }

    if let Some(path) = &config.packages.path {
        if path.as_os_str().is_empty() {
            anyhow::bail!("packages.path must not be empty when set");
        }
    }

    Ok(config)
}
