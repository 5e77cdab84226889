use std::path::PathBuf;

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum PackError {
    /// The collection or the key inside it does not exist
    #[error("thing does not exist: {location}/{key}")]
    NotFound { location: String, key: String },
    /// The backing store could not be opened or locked
    #[error("storage unavailable at {}: {source}", path.display())]
    StorageUnavailable { path: PathBuf, source: BoxError },
    #[error("Serialization error: {0}")]
    Serialization(#[source] BoxError),
    #[error("Storage error: {0}")]
    Storage(#[source] BoxError),
}

impl PackError {
    pub fn not_found(location: &str, key: &str) -> Self { PackError::NotFound { location: location.to_owned(), key: key.to_owned() } }

    pub fn unavailable(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        PackError::StorageUnavailable { path: path.into(), source: source.into() }
    }

    pub fn serialization(err: impl Into<BoxError>) -> Self { PackError::Serialization(err.into()) }

    pub fn storage(err: impl Into<BoxError>) -> Self { PackError::Storage(err.into()) }

    /// Absent collections and keys are a normal outcome, not an operational failure
    pub fn is_not_found(&self) -> bool { matches!(self, PackError::NotFound { .. }) }

    pub fn is_unavailable(&self) -> bool { matches!(self, PackError::StorageUnavailable { .. }) }

    pub fn is_serialization(&self) -> bool { matches!(self, PackError::Serialization(_)) }
}

impl From<serde_json::Error> for PackError {
    fn from(e: serde_json::Error) -> Self { PackError::Serialization(Box::new(e)) }
}
