//! The nonce-grinding search loop.

use alloc::string::{String, ToString};

use crate::address::{create_address, deployer_from_public_key};
use crate::error::MinerError;
use crate::recovery::{KeyRecovery, Secp256k1Recovery};
use crate::result::MiningResult;
use crate::score::score;
use crate::session::{set_round, MiningSession, NONCE_PREFIX_LEN};

/// Grinds candidate signatures for one session.
///
/// The session is fixed for the lifetime of the miner; build a new miner to
/// reconfigure.
#[derive(Debug, Clone)]
pub struct Miner<R = Secp256k1Recovery> {
    session: MiningSession,
    recovery: R,
}

impl Miner<Secp256k1Recovery> {
    /// Miner using secp256k1 recovery.
    pub fn new(session: MiningSession) -> Self {
        Miner::with_recovery(session, Secp256k1Recovery)
    }
}

impl<R: KeyRecovery> Miner<R> {
    /// Miner using a custom recovery backend.
    pub fn with_recovery(session: MiningSession, recovery: R) -> Self {
        Miner { session, recovery }
    }

    pub fn session(&self) -> &MiningSession {
        &self.session
    }

    /// Score the candidate whose signature `s` scalar is `nonce_field`.
    ///
    /// Returns `None` when the signature cannot be parsed or recovered, or
    /// the recovered key is not a 65-byte uncompressed point.
    pub fn evaluate(&self, nonce_field: &[u8; 32]) -> Option<MiningResult> {
        let mut signature = [0u8; 64];
        signature[..32].copy_from_slice(self.session.sig_r());
        signature[32..].copy_from_slice(nonce_field);

        let pubkey = match self.recovery.recover_uncompressed(
            self.session.target_hash(),
            &signature,
            self.session.recovery_id(),
        ) {
            Ok(pubkey) => pubkey,
            Err(err) => {
                tracing::debug!(error = %err, "skipping candidate");
                return None;
            }
        };

        let Some(deployer) = deployer_from_public_key(&pubkey) else {
            tracing::debug!(len = pubkey.len(), "skipping candidate: invalid public key");
            return None;
        };

        let address = create_address(&deployer);
        Some(MiningResult {
            score: score(&address, self.session.suffix(), self.session.prefix()),
            address,
            nonce_field: *nonce_field,
        })
    }

    /// Run `max_rounds` rounds for a caller nonce and return the best result.
    ///
    /// Only a strictly higher score replaces the current best, so ties keep
    /// the earliest round. With no scoring round the result is all zeros.
    pub fn mine(&self, nonce: &[u8; NONCE_PREFIX_LEN]) -> MiningResult {
        let mut field = self.session.base_nonce_field(nonce);
        let mut best = MiningResult::default();
        let mut skipped = 0u32;

        for round in 0..self.session.max_rounds() {
            set_round(&mut field, round);

            let Some(candidate) = self.evaluate(&field) else {
                skipped += 1;
                continue;
            };

            if candidate.score > best.score {
                tracing::trace!(round, score = candidate.score, "new best candidate");
                best = candidate;
            }
        }

        tracing::debug!(
            rounds = self.session.max_rounds(),
            skipped,
            best_score = best.score,
            "mining run finished"
        );
        best
    }

    /// String boundary of [`mine`](Self::mine).
    ///
    /// Returns the formatted best result, or `!` followed by an error
    /// message when the nonce is not valid hex of at most 16 bytes.
    pub fn run(&self, nonce_hex: &str) -> String {
        match self.try_run(nonce_hex) {
            Ok(result) => result.to_string(),
            Err(err) => err.to_boundary_string(),
        }
    }

    /// Parse the nonce and mine.
    pub fn try_run(&self, nonce_hex: &str) -> Result<MiningResult, MinerError> {
        let nonce = MiningSession::parse_nonce(nonce_hex)?;
        Ok(self.mine(&nonce))
    }

    /// Check a claimed result string by mining the same nonce again.
    pub fn verify(&self, nonce_hex: &str, claimed: &str) -> Result<bool, MinerError> {
        let claimed: MiningResult = claimed.parse()?;
        let actual = self.try_run(nonce_hex)?;
        Ok(actual == claimed)
    }
}
