pub mod error;
pub mod meta;
pub mod packable;
pub mod storage;

pub use error::PackError;
pub use meta::extract_meta;
pub use packable::{pack_json, unpack_json, Packable, Packed};
pub use storage::Pack;
