use std::thread;
use std::time::{Duration, Instant};

use kvpack_core::PackError;
use tracing::{debug, warn};

use crate::config::SledPackConfig;
use crate::error::{is_lock_contention, sled_error};

const RETRY_INTERVAL: Duration = Duration::from_millis(25);

/// An open sled database, alive for the duration of a single operation.
/// Dropping it closes the files and releases sled's lock on the directory.
pub(crate) struct Database {
    db: sled::Db,
}

impl Database {
    pub fn open(config: &SledPackConfig) -> Result<Self, PackError> {
        let path = &config.path;
        if path.as_os_str().is_empty() {
            return Err(PackError::unavailable(path, "no database path configured"));
        }
        std::fs::create_dir_all(path).map_err(|e| PackError::unavailable(path, e))?;

        let deadline = Instant::now() + config.open_timeout;
        let mut attempt = 1u32;
        loop {
            match sled::Config::new().path(path).flush_every_ms(None).open() {
                Ok(db) => return Ok(Self { db }),
                Err(err) if is_lock_contention(&err) => {
                    let now = Instant::now();
                    if now >= deadline {
                        warn!("Database({}).open: gave up after {} attempts: {}", path.display(), attempt, err);
                        return Err(PackError::unavailable(path, err));
                    }
                    debug!("Database({}).open: attempt {} contended: {}", path.display(), attempt, err);
                    thread::sleep(RETRY_INTERVAL.min(deadline - now));
                    attempt += 1;
                }
                Err(err) => return Err(PackError::unavailable(path, err)),
            }
        }
    }

    /// Open an existing tree without creating it
    pub fn tree(&self, location: &str) -> Result<Option<sled::Tree>, PackError> {
        if !self.db.tree_names().iter().any(|name| &name[..] == location.as_bytes()) {
            return Ok(None);
        }
        self.db.open_tree(location).map(Some).map_err(sled_error)
    }

    pub fn create_tree(&self, location: &str) -> Result<sled::Tree, PackError> { self.db.open_tree(location).map_err(sled_error) }

    pub fn flush(&self) -> Result<(), PackError> {
        self.db.flush().map_err(sled_error)?;
        Ok(())
    }
}
