//! Deployer and contract address derivation.

use crate::hash::{keccak256, low_20};

/// Length of an uncompressed SEC1 public key.
pub const UNCOMPRESSED_PUBKEY_LEN: usize = 65;

/// SEC1 tag of an uncompressed public key.
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// CREATE address for a deployer at nonce 0.
///
/// `keccak256(rlp([deployer, 0]))[12..]`, where the RLP encoding is the fixed
/// 23 bytes `0xd6 0x94 <deployer> 0x80`.
pub fn create_address(deployer: &[u8; 20]) -> [u8; 20] {
    let mut buf = [0u8; 23];
    buf[0] = 0xd6; // list, 22 bytes payload
    buf[1] = 0x94; // string, 20 bytes
    buf[2..22].copy_from_slice(deployer);
    buf[22] = 0x80; // nonce 0 encodes as the empty string
    low_20(&keccak256(&buf))
}

/// Account address of an uncompressed public key.
///
/// Returns `None` unless the key is exactly 65 bytes with a leading `0x04`.
pub fn deployer_from_public_key(pubkey: &[u8]) -> Option<[u8; 20]> {
    if pubkey.len() != UNCOMPRESSED_PUBKEY_LEN || pubkey[0] != UNCOMPRESSED_TAG {
        return None;
    }
    Some(low_20(&keccak256(&pubkey[1..])))
}
