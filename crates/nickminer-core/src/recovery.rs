//! Public key recovery from compact recoverable signatures.

use alloc::vec::Vec;

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;

use crate::error::RecoveryError;

/// Recovers the signer's uncompressed public key from a signature.
///
/// The miner only needs the SEC1 bytes of the key; implementations return
/// whatever their serializer produced and the miner validates the shape.
pub trait KeyRecovery {
    /// Recover from a 32-byte prehash, a 64-byte `r || s` signature and a
    /// raw recovery id.
    fn recover_uncompressed(
        &self,
        prehash: &[u8; 32],
        signature: &[u8; 64],
        recovery_id: u8,
    ) -> Result<Vec<u8>, RecoveryError>;
}

/// secp256k1 recovery backed by `k256`.
///
/// Matches libsecp256k1 semantics: high-S signatures are accepted. They are
/// normalized and the parity bit flipped, which recovers the same key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Recovery;

impl KeyRecovery for Secp256k1Recovery {
    fn recover_uncompressed(
        &self,
        prehash: &[u8; 32],
        signature: &[u8; 64],
        recovery_id: u8,
    ) -> Result<Vec<u8>, RecoveryError> {
        let mut signature =
            Signature::from_slice(signature).map_err(|_| RecoveryError::InvalidSignature)?;
        let mut recid = RecoveryId::from_byte(recovery_id)
            .ok_or(RecoveryError::InvalidRecoveryId(recovery_id))?;

        if let Some(normalized) = signature.normalize_s() {
            signature = normalized;
            recid = RecoveryId::new(!recid.is_y_odd(), recid.is_x_reduced());
        }

        let key = VerifyingKey::recover_from_prehash(prehash, &signature, recid)
            .map_err(|_| RecoveryError::RecoveryFailed)?;

        Ok(key.as_affine().to_encoded_point(false).as_bytes().to_vec())
    }
}
