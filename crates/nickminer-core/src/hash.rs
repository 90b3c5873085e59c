//! Keccak-256 hashing.

use sha3::{Digest, Keccak256};

/// Ethereum's Keccak-256 (the pre-standard SHA-3 padding).
///
/// Used for public key hashing, CREATE address derivation and the
/// preimage commitment.
#[inline]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let hash = Keccak256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// Low 20 bytes of a 32-byte hash.
#[inline]
pub fn low_20(hash: &[u8; 32]) -> [u8; 20] {
    let mut out = [0u8; 20];
    out.copy_from_slice(&hash[12..]);
    out
}
