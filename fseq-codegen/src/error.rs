use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid element type `{0}`: expected a Rust identifier")]
    InvalidElementType(String),
    #[error("Element type `{0}` clashes with a name the generated module defines")]
    ReservedElementType(String),
    #[error("Invalid package name `{0}`: expected a Rust identifier")]
    InvalidPackageName(String),
    #[error("Cannot write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the input was rejected before anything was written.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Error::Io { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
