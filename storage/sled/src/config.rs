use std::path::PathBuf;
use std::time::Duration;

use kvpack_core::PackError;

/// How long an operation waits for the database lock before giving up
pub const DEFAULT_OPEN_TIMEOUT: Duration = Duration::from_secs(10);

/// Where a [`SledPack`](crate::SledPack) keeps its data.
///
/// The lock wait is always [`DEFAULT_OPEN_TIMEOUT`]; it cannot be changed from outside the crate.
///
/// ```compile_fail
/// use std::time::Duration;
/// let config = kvpack_storage_sled::SledPackConfig::new("/tmp/kvpack").with_open_timeout(Duration::from_millis(5));
/// ```
///
/// ```compile_fail
/// let mut config = kvpack_storage_sled::SledPackConfig::new("/tmp/kvpack");
/// config.open_timeout = std::time::Duration::ZERO;
/// ```
#[derive(Clone, Debug)]
pub struct SledPackConfig {
    /// Directory sled keeps its files in. Created on first use.
    pub path: PathBuf,
    pub(crate) open_timeout: Duration,
}

impl SledPackConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into(), open_timeout: DEFAULT_OPEN_TIMEOUT } }

    pub fn with_homedir_folder(folder_name: &str) -> Result<Self, PackError> {
        let dir = dirs::home_dir().ok_or_else(|| PackError::unavailable(folder_name, "failed to get home directory"))?.join(folder_name);
        Ok(Self::new(dir))
    }

    pub fn open_timeout(&self) -> Duration { self.open_timeout }

    #[cfg(test)]
    pub(crate) fn with_open_timeout(mut self, open_timeout: Duration) -> Self {
        self.open_timeout = open_timeout;
        self
    }
}
