use std::str::FromStr;

use kvpack_core::{pack_json, unpack_json, PackError, Packable, Packed};
use kvpack_storage_sled::SledPack;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;
use tracing::Level;

#[allow(unused)]
pub const LOCATION: &str = "__TEST__";

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() {
    // if LOG_LEVEL env var is set, use it
    if let Ok(level) = std::env::var("LOG_LEVEL") {
        tracing_subscriber::fmt().with_max_level(Level::from_str(&level).unwrap()).with_test_writer().init();
    } else {
        tracing_subscriber::fmt().with_max_level(Level::INFO).with_test_writer().init();
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockThing {
    pub name: String,
    pub points: i64,
    pub meta: MockMeta,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockMeta {
    pub name: String,
    pub count: i64,
}

impl Packable for MockThing {
    fn pack(&self) -> Result<Packed, PackError> { pack_json(&self.name, self) }

    fn unpack(&mut self, bytes: &[u8]) -> Result<(), PackError> {
        *self = unpack_json(bytes)?;
        Ok(())
    }
}

#[allow(unused)]
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockThingNoMeta {
    pub name: String,
    pub points: i64,
}

impl Packable for MockThingNoMeta {
    fn pack(&self) -> Result<Packed, PackError> { pack_json(&self.name, self) }

    fn unpack(&mut self, bytes: &[u8]) -> Result<(), PackError> {
        *self = unpack_json(bytes)?;
        Ok(())
    }
}

#[allow(unused)]
/// Packs itself as its raw text, which is not JSON
#[derive(Debug)]
pub struct NotStruct(pub &'static str);

impl Packable for NotStruct {
    fn pack(&self) -> Result<Packed, PackError> { Ok(Packed::new(self.0, self.0.as_bytes())) }

    fn unpack(&mut self, _bytes: &[u8]) -> Result<(), PackError> { Ok(()) }
}

#[allow(unused)]
/// Always fails to pack
#[derive(Debug)]
pub struct Unpackable;

impl Packable for Unpackable {
    fn pack(&self) -> Result<Packed, PackError> { Err(PackError::serialization("refusing to pack")) }

    fn unpack(&mut self, _bytes: &[u8]) -> Result<(), PackError> { Err(PackError::serialization("refusing to unpack")) }
}

#[allow(unused)]
pub fn mock(name: &str, points: i64) -> MockThing { MockThing { name: name.to_owned(), points, meta: MockMeta::default() } }

#[allow(unused)]
pub fn mock_with_meta(name: &str, points: i64, meta_name: &str, count: i64) -> MockThing {
    MockThing { name: name.to_owned(), points, meta: MockMeta { name: meta_name.to_owned(), count } }
}

#[allow(unused)]
/// A pack in a fresh temporary directory. Keep the TempDir alive for as long as the pack is used.
pub fn setup_pack() -> Result<(TempDir, SledPack), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let pack = SledPack::with_path(dir.path().join("pack.db"));
    Ok((dir, pack))
}
