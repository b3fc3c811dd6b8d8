//! Errors raised while reading the content store

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a listing or article read
#[derive(Debug, Error)]
pub enum ArticleError {
    /// The content store or a requested article does not exist
    #[error("not found: {what}")]
    NotFound { what: String },

    /// Front-matter is missing, incomplete, or carries a malformed date
    #[error("failed to parse article '{id}': {reason}")]
    Parse { id: String, reason: String },

    /// Any other filesystem failure
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ArticleError {
    pub(crate) fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    pub(crate) fn parse(id: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            id: id.into(),
            reason: reason.to_string(),
        }
    }

    /// Map an I/O error on `path`, turning a missing file into `NotFound`
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                what: path.display().to_string(),
            }
        } else {
            Self::Io { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
