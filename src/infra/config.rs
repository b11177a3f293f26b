// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scaffold: ScaffoldConfig,

    #[serde(default)]
    pub templates: TemplatesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Plugins base directory, relative to the workspace root.
    #[serde(default = "default_plugins_dir")]
    pub plugins_dir: PathBuf,

    /// Preselected answer for the webview prompt, and the answer used
    /// when running non-interactively without a webview flag.
    #[serde(default)]
    pub webview_default: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            plugins_dir: default_plugins_dir(),
            webview_default: false,
        }
    }
}

fn default_plugins_dir() -> PathBuf {
    PathBuf::from("src/core/plugins")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Custom server index template file; the bundled template is used
    /// when unset.
    pub server_index: Option<PathBuf>,
}

impl Config {
    /// Load config from the default location, falling back to defaults
    /// when no config.toml exists.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
