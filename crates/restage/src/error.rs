//! Errors raised by staging operations

use std::io;
use std::path::{Path, PathBuf};

/// Represents any error a staging operation can fail with
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    /// `replace` requires its source to exist
    #[error("source {0:?} does not exist")]
    MissingSource(PathBuf),
    /// A filesystem call failed; carries which action on which path
    #[error("couldn't {action} {path:?}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

assert_impl_all!(StageError: Send, Sync);

impl StageError {
    /// Adapter for `map_err`: tags an io error with the failed action and path
    pub fn io<'a>(action: &'static str, path: &'a Path) -> impl FnOnce(io::Error) -> StageError + 'a {
        move |source| StageError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type StageResult<T = ()> = Result<T, StageError>;
