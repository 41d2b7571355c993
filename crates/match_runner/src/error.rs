//! Errors raised while configuring, playing, or recording matches

use std::path::PathBuf;

use qirkat_core::QirkatError;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid match config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to encode match config: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    #[error("invalid match report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    #[error("{0}")]
    Usage(String),

    /// A recorded move that does not replay on the recorded position.
    #[error("replay failed at ply {ply}: {source}")]
    Replay { ply: usize, source: QirkatError },

    #[error(transparent)]
    Rules(#[from] QirkatError),
}

pub type Result<T> = std::result::Result<T, HarnessError>;

impl HarnessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HarnessError::Io {
            path: path.into(),
            source,
        }
    }
}
