//! Fingerprint identity digest
//!
//! SHA-256 over the UTF-8 bytes of the compact canonical JSON form of the
//! record, rendered as 64 lowercase hex characters. Canonical equality of
//! records implies digest equality.

use sha2::{Digest, Sha256};

use crate::canonical;
use crate::error::Result;
use crate::record::FingerprintRecord;

/// Lowercase hex SHA-256 of arbitrary bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// The displayed fingerprint identity for a record.
pub fn fingerprint_hash(record: &FingerprintRecord) -> Result<String> {
    let canonical = canonical::to_canonical_json(record)?;
    Ok(sha256_hex(canonical.as_bytes()))
}
