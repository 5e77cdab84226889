use std::io::ErrorKind;

use kvpack_core::PackError;
use sled::transaction::TransactionError;

pub fn sled_error(err: sled::Error) -> PackError { PackError::storage(err) }

/// Aborts carry our own error back out of the transaction untouched
pub fn transaction_error(err: TransactionError<PackError>) -> PackError {
    match err {
        TransactionError::Abort(err) => err,
        TransactionError::Storage(err) => sled_error(err),
    }
}

/// sled reports a held file lock as an `Other` io error carrying this text
const LOCK_HELD: &str = "could not acquire";

pub(crate) fn is_lock_contention(err: &sled::Error) -> bool {
    match err {
        sled::Error::Io(io) => match io.kind() {
            ErrorKind::WouldBlock => true,
            ErrorKind::Other => io.to_string().contains(LOCK_HELD),
            _ => false,
        },
        _ => false,
    }
}
