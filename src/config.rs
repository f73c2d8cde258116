use crate::scan::DEFAULT_FILES;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "envpeek.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Files to look at, in order, relative to the working directory
    #[serde(default = "default_files")]
    pub files: Vec<String>,
}

fn default_files() -> Vec<String> {
    DEFAULT_FILES.iter().map(|f| f.to_string()).collect()
}

impl Config {
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load `envpeek.toml` from the working directory, falling back to defaults.
    pub fn discover() -> Result<Self> {
        Self::discover_in(Path::new("."))
    }

    pub fn discover_in(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            log::debug!("Loading config from {}", path.display());
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: default_files(),
        }
    }
}
