use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::consts::APP_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Location of the SQLite log store
    #[serde(default)]
    pub(crate) db_path: Option<PathBuf>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) quiet: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        if !quiet {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/braglog/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_NAME).join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support/braglog/config.toml)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_NAME).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.braglog.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{APP_NAME}.toml")));
        }

        paths
    }
}
