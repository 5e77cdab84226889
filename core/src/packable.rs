use serde::{de::DeserializeOwned, Serialize};

use crate::error::PackError;

/// The serialized form of an item: the key it is stored under and its bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packed {
    pub key: String,
    pub bytes: Vec<u8>,
}

impl Packed {
    pub fn new(key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self { Self { key: key.into(), bytes: bytes.into() } }
}

/// Something that can be stored in a [`Pack`](crate::Pack).
///
/// The store never looks inside the bytes, with one exception: `list_meta`
/// expects a JSON object and reads its `"meta"` field. Implementations that
/// want their metadata listed should therefore pack themselves as JSON,
/// which is what [`pack_json`] and [`unpack_json`] are for.
pub trait Packable {
    /// Produce the key and bytes this item is stored as
    fn pack(&self) -> Result<Packed, PackError>;

    /// Populate this item from previously packed bytes
    fn unpack(&mut self, bytes: &[u8]) -> Result<(), PackError>;
}

pub fn pack_json<T: Serialize + ?Sized>(key: impl Into<String>, value: &T) -> Result<Packed, PackError> {
    Ok(Packed { key: key.into(), bytes: serde_json::to_vec(value)? })
}

pub fn unpack_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, PackError> { Ok(serde_json::from_slice(bytes)?) }
