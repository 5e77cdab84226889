use serde_json::Value;

use crate::error::PackError;
use crate::packable::Packable;

/// A place to store packable things, organized into named locations.
///
/// Every call is self-contained: implementations serialize access per
/// instance and hold no open handle between calls.
pub trait Pack: Send + Sync {
    /// Pack `thing` and upsert it into `location`, creating the location if needed
    fn save(&self, location: &str, thing: &dyn Packable) -> Result<(), PackError>;

    /// Fetch an owned copy of the bytes stored under `key`
    fn get(&self, location: &str, key: &str) -> Result<Vec<u8>, PackError>;

    fn delete(&self, location: &str, key: &str) -> Result<(), PackError>;

    /// All keys in `location`, ascending. A missing location is empty, not an error.
    fn list(&self, location: &str) -> Result<Vec<String>, PackError>;

    /// The `"meta"` field of every JSON object in `location`, in key order.
    ///
    /// Entries without the field are skipped; entries that are not JSON
    /// objects fail the whole call.
    fn list_meta(&self, location: &str) -> Result<Vec<Value>, PackError>;

    fn get_into(&self, location: &str, key: &str, thing: &mut dyn Packable) -> Result<(), PackError> {
        let bytes = self.get(location, key)?;
        thing.unpack(&bytes)
    }
}
