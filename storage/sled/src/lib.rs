//! A [`kvpack_core::Pack`] stored in a [sled](https://docs.rs/sled) database.
//!
//! Each location is a sled tree. The database directory is opened, used for
//! one transaction and closed again on every call.
//!
//! ```no_run
//! use kvpack_core::{pack_json, Pack, PackError, Packable, Packed};
//! use kvpack_storage_sled::SledPack;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default, Serialize, Deserialize)]
//! struct Album {
//!     name: String,
//!     year: String,
//! }
//!
//! impl Packable for Album {
//!     fn pack(&self) -> Result<Packed, PackError> { pack_json(&self.name, self) }
//!     fn unpack(&mut self, bytes: &[u8]) -> Result<(), PackError> {
//!         *self = kvpack_core::unpack_json(bytes)?;
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<(), PackError> {
//! let pack = SledPack::with_path("/var/lib/albums");
//! pack.save("albums", &Album { name: "Showbiz".into(), year: "1999".into() })?;
//!
//! let mut album = Album::default();
//! pack.get_into("albums", "Showbiz", &mut album)?;
//! assert_eq!(pack.list("albums")?, vec!["Showbiz"]);
//! # Ok(())
//! # }
//! ```

pub mod config;
mod database;
pub mod engine;
pub mod error;

pub use config::{SledPackConfig, DEFAULT_OPEN_TIMEOUT};
pub use engine::SledPack;
