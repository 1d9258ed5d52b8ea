use color_eyre::eyre::{eyre, Result};
use log::{debug, info, LevelFilter};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::playground::ScriptedEdit;
use crate::theme::{Density, ThemeFamily};

const FILE_NAME: &str = "playground.yml";
const CONFIG_DIR: &str = ".config";
const APP_CONFIG_DIR: &str = "theme-playground";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Theme family previewed at startup
    pub family: ThemeFamily,
    /// Start on the 8px grid
    pub dense: bool,
    /// Directory of per-slot theme files (`default.yml`, `flat_8px.yml`, ...)
    pub theme_dir: Option<PathBuf>,
    pub log_level: String,
    /// Edits replayed at startup
    pub edits: Vec<ScriptedEdit>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            family: ThemeFamily::Default,
            dense: false,
            theme_dir: None,
            log_level: "debug".to_string(),
            edits: vec![],
        }
    }
}

impl PlaygroundConfig {
    pub fn density(&self) -> Density {
        Density::from_8px(self.dense)
    }

    /// Log level, `Debug` if the configured one is not recognised
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Debug)
    }

    /// Path of the config file in the user's config directory, created if needed
    pub fn get_or_build_path() -> Result<PathBuf> {
        match dirs::home_dir() {
            Some(home) => {
                let path = Path::new(&home);
                let app_config_dir = path.join(CONFIG_DIR).join(APP_CONFIG_DIR);

                if !app_config_dir.exists() {
                    fs::create_dir_all(&app_config_dir)?;
                }

                Ok(app_config_dir.join(FILE_NAME))
            }
            None => Err(eyre!("No $HOME directory found for playground config")),
        }
    }

    /// Load the config from `path`, or from the user's config directory.
    ///
    /// A missing file in the config directory is created with default values;
    /// a missing explicit `path` is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::get_or_build_path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    let config = Self::default();
                    config.save(&path)?;
                    info!("Default config saved to {}", path.display());
                    Ok(config)
                }
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let config_string = fs::read_to_string(path)
            .map_err(|e| eyre!("Cannot read config {}: {e}", path.display()))?;
        let config: PlaygroundConfig = serde_yaml::from_str(&config_string)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content_yml = serde_yaml::to_string(self)?;
        fs::write(path, content_yml)?;
        Ok(())
    }
}
