use thiserror::Error;

use crate::assets::AssetError;
use crate::config::ConfigError;

/// Anything that stops the game from starting or running.
#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not load sprites: {0}")]
    Asset(#[from] AssetError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
