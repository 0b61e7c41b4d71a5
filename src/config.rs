//! Runtime configuration, read from TOML.
//!
//! Lookup order: the file named by `SPACE_SHOOTER_CONFIG`, then
//! `space_shooter.toml` in the working directory, then built-in defaults.
//! Gameplay tuning is not configurable; see `constants`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assets::{AssetProvider, BuiltinAssets, DirectoryAssets};
use crate::constants::TARGET_FPS;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Target ticks per second.
    pub fps: u32,
    /// Directory holding `<name>.png` sprites.  Built-in art when unset.
    pub asset_dir: Option<PathBuf>,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
    /// Frames a key stays held after its last press or repeat event.
    pub hold_window: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: TARGET_FPS,
            asset_dir: None,
            seed: None,
            hold_window: 8,
        }
    }
}

impl GameConfig {
    pub const ENV_VAR: &'static str = "SPACE_SHOOTER_CONFIG";
    pub const DEFAULT_FILE: &'static str = "space_shooter.toml";

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(Self::ENV_VAR) {
            return Self::load_from_file(Path::new(&path));
        }
        let local = Path::new(Self::DEFAULT_FILE);
        if local.is_file() {
            return Self::load_from_file(local);
        }
        log::debug!("No config file, using defaults");
        Ok(Self::default())
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn asset_provider(&self) -> Box<dyn AssetProvider> {
        match &self.asset_dir {
            Some(dir) => Box::new(DirectoryAssets::new(dir.clone())),
            None => Box::new(BuiltinAssets),
        }
    }
}
