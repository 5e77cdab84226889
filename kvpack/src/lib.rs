//! # kvpack
//!
//! A small persistence facade: things that know how to pack themselves into a
//! key and some bytes are saved into named locations of an embedded,
//! file-backed key-value database, and can be fetched, deleted and listed by
//! key.
//!
//! ## Core Concepts
//!
//! - **Location**: a named namespace of entries, created on first save
//! - **Entry**: one key and its bytes inside a location
//! - **Packable**: a type that serializes itself to an entry and back
//! - **Meta**: the `"meta"` field of a JSON entry, listed by [`Pack::list_meta`]
//!   without deserializing whole entries
//!
//! ## Example
//!
//! ```rust
//! # use kvpack::{Pack, PackError, Packable, Packed};
//! # use serde::{Deserialize, Serialize};
//! #[derive(Default, Serialize, Deserialize)]
//! struct Album {
//!     name: String,
//!     meta: AlbumMeta,
//! }
//!
//! #[derive(Default, Serialize, Deserialize)]
//! struct AlbumMeta {
//!     tracks: u32,
//! }
//!
//! impl Packable for Album {
//!     fn pack(&self) -> Result<Packed, PackError> { kvpack::pack_json(&self.name, self) }
//!     fn unpack(&mut self, bytes: &[u8]) -> Result<(), PackError> {
//!         *self = kvpack::unpack_json(bytes)?;
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::tempdir()?;
//! let pack = kvpack::open(dir.path().join("albums.db"));
//! pack.save("albums", &Album { name: "Showbiz".into(), meta: AlbumMeta { tracks: 12 } })?;
//!
//! assert_eq!(pack.list("albums")?, vec!["Showbiz"]);
//! assert_eq!(pack.list_meta("albums")?, vec![serde_json::json!({"tracks": 12})]);
//!
//! pack.delete("albums", "Showbiz")?;
//! assert!(pack.get("albums", "Showbiz").unwrap_err().is_not_found());
//! # Ok(())
//! # }
//! ```

pub use kvpack_core::{extract_meta, pack_json, unpack_json, Pack, PackError, Packable, Packed};

#[cfg(feature = "sled")]
pub use kvpack_storage_sled::{SledPack, SledPackConfig, DEFAULT_OPEN_TIMEOUT};

/// A sled-backed pack at `path`. Nothing is opened until the first operation.
#[cfg(feature = "sled")]
pub fn open(path: impl Into<std::path::PathBuf>) -> SledPack { SledPack::with_path(path) }

pub use serde_json::Value;
