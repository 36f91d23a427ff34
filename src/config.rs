use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum FrontendPreference {
    /// Console unless a form harness says otherwise (default)
    #[default]
    Auto,
    Console,
    Form,
}

impl FrontendPreference {
    /// Parse a marker value; unknown values are `None`.
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Some(FrontendPreference::Auto),
            "console" => Some(FrontendPreference::Console),
            "form" => Some(FrontendPreference::Form),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) output: Option<PathBuf>,
    #[serde(default)]
    pub(crate) frontend: Option<FrontendPreference>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if let Some(config) = Self::load_from(&path) {
                return config;
            }
        }

        Self::default()
    }

    fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let content = fs::read_to_string(path).ok()?;
        match toml::from_str::<Config>(&content) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/apptrack/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("apptrack").join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/apptrack/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join("apptrack").join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 3. Home directory: ~/.apptrack.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".apptrack.toml"));
        }

        paths
    }
}
