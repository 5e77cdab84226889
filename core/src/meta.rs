use serde_json::{Map, Value};

use crate::error::PackError;

pub const META_FIELD: &str = "meta";

/// Pull the `"meta"` field out of a stored JSON object.
///
/// Returns `Ok(None)` when the object has no such field. Anything that is not
/// a well-formed JSON object (a bare string, an array, `null`, garbage) is a
/// serialization error rather than a skip.
pub fn extract_meta(bytes: &[u8]) -> Result<Option<Value>, PackError> {
    let mut object: Map<String, Value> = serde_json::from_slice(bytes)?;
    Ok(object.remove(META_FIELD))
}
