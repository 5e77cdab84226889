use std::path::PathBuf;
use std::sync::Mutex;

use kvpack_core::{extract_meta, Pack, PackError, Packable, Packed};
use serde_json::Value;
use sled::transaction::{ConflictableTransactionError, ConflictableTransactionResult};
use tracing::{debug, warn};

use crate::config::SledPackConfig;
use crate::database::Database;
use crate::error::{sled_error, transaction_error};

/// A [`Pack`] backed by a sled database directory.
///
/// The database is opened at the start of every operation and closed at the
/// end of it, so nothing stays locked between calls and another process may
/// use the same directory in the gaps. Within one process, all operations on
/// a `SledPack` are serialized by a single mutex.
pub struct SledPack {
    config: SledPackConfig,
    lock: Mutex<()>,
}

impl SledPack {
    pub fn new(config: SledPackConfig) -> Self { Self { config, lock: Mutex::new(()) } }

    pub fn with_path(path: impl Into<PathBuf>) -> Self { Self::new(SledPackConfig::new(path)) }

    pub fn with_homedir_folder(folder_name: &str) -> Result<Self, PackError> { Ok(Self::new(SledPackConfig::with_homedir_folder(folder_name)?)) }

    pub fn config(&self) -> &SledPackConfig { &self.config }

    fn with_database<T>(&self, f: impl FnOnce(&Database) -> Result<T, PackError>) -> Result<T, PackError> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| {
            warn!("SledPack({}): recovering poisoned lock", self.config.path.display());
            poisoned.into_inner()
        });
        let database = Database::open(&self.config)?;
        let result = f(&database);
        drop(database);
        result
    }
}

impl Pack for SledPack {
    fn save(&self, location: &str, thing: &dyn Packable) -> Result<(), PackError> {
        // packing happens before the database is touched, so a failure leaves no trace
        let Packed { key, bytes } = thing.pack()?;

        self.with_database(|database| {
            let tree = database.create_tree(location)?;
            tree.transaction(|tx| -> ConflictableTransactionResult<(), PackError> {
                tx.insert(key.as_bytes(), bytes.as_slice())?;
                Ok(())
            })
            .map_err(transaction_error)?;
            database.flush()?;

            debug!("SledPack.save: {}/{} ({} bytes)", location, key, bytes.len());
            Ok(())
        })
    }

    fn get(&self, location: &str, key: &str) -> Result<Vec<u8>, PackError> {
        self.with_database(|database| {
            let Some(tree) = database.tree(location)? else {
                return Err(PackError::not_found(location, key));
            };
            match tree.get(key.as_bytes()).map_err(sled_error)? {
                Some(value) => {
                    debug!("SledPack.get: {}/{} ({} bytes)", location, key, value.len());
                    Ok(value.to_vec())
                }
                None => Err(PackError::not_found(location, key)),
            }
        })
    }

    fn delete(&self, location: &str, key: &str) -> Result<(), PackError> {
        self.with_database(|database| {
            let Some(tree) = database.tree(location)? else {
                return Err(PackError::not_found(location, key));
            };
            tree.transaction(|tx| -> ConflictableTransactionResult<(), PackError> {
                match tx.remove(key.as_bytes())? {
                    Some(_) => Ok(()),
                    None => Err(ConflictableTransactionError::Abort(PackError::not_found(location, key))),
                }
            })
            .map_err(transaction_error)?;
            database.flush()?;

            debug!("SledPack.delete: {}/{}", location, key);
            Ok(())
        })
    }

    fn list(&self, location: &str) -> Result<Vec<String>, PackError> {
        self.with_database(|database| {
            let Some(tree) = database.tree(location)? else {
                debug!("SledPack.list: {} does not exist", location);
                return Ok(Vec::new());
            };

            // sled iterates in byte order, which is lexicographic order for utf-8 keys
            let keys = tree
                .iter()
                .keys()
                .map(|key| String::from_utf8(key.map_err(sled_error)?.to_vec()).map_err(PackError::storage))
                .collect::<Result<Vec<_>, _>>()?;

            debug!("SledPack.list: {} ({} keys)", location, keys.len());
            Ok(keys)
        })
    }

    fn list_meta(&self, location: &str) -> Result<Vec<Value>, PackError> {
        self.with_database(|database| {
            let Some(tree) = database.tree(location)? else {
                return Ok(Vec::new());
            };

            let mut metas = Vec::new();
            for entry in tree.iter() {
                let (key, value) = entry.map_err(sled_error)?;
                match extract_meta(&value) {
                    Ok(Some(meta)) => metas.push(meta),
                    Ok(None) => {}
                    Err(err) => {
                        debug!("SledPack.list_meta: {}/{} is not a JSON object", location, String::from_utf8_lossy(&key));
                        return Err(err);
                    }
                }
            }

            debug!("SledPack.list_meta: {} ({} metas)", location, metas.len());
            Ok(metas)
        })
    }
}
