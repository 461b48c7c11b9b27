use std::io;
use std::path::PathBuf;

/// Errors that abort a whole scan, lookup or render.
///
/// Per-line problems (malformed JSON, unknown record kinds, messages with no
/// displayable content) never show up here; they are skipped by the parsers.
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("session {0} not found")]
    SessionNotFound(String),

    #[error("invalid session id: {0:?}")]
    InvalidSessionId(String),

    #[error("failed to render document: {0}")]
    Render(#[from] tera::Error),
}

impl ShareError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open { path: path.into(), source }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read { path: path.into(), source }
    }
}

pub type Result<T, E = ShareError> = std::result::Result<T, E>;
