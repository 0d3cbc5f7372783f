use thiserror::Error;

use crate::sfx::SfxType;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Song not found: {0}")]
    SongNotFound(String),

    #[error("Song index out of range: {0}")]
    SongIndexOutOfRange(usize),

    #[error("No sound effect registered for type {0}")]
    SfxNotFound(SfxType),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.message().to_string())
    }
}
