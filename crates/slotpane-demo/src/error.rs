use std::path::PathBuf;

use slotpane::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("slot {slot} is outside the {capacity}-slot grid")]
    SlotOutOfRange { slot: usize, capacity: usize },
}

impl DemoError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } | Self::SlotOutOfRange { .. } => 2,
            _ => 1,
        }
    }
}
