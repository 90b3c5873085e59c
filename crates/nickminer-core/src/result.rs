//! Mining results and their wire format.
//!
//! A result travels as `0x<score:1><address:20><nonce>` where the nonce is
//! the candidate's `s` scalar with leading zero bytes removed.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::codec::{encode_prefixed, trim_leading_zeros};
use crate::error::ResultError;
use crate::session::MiningSession;

/// Hex characters taken by the score and address.
const HEADER_HEX_LEN: usize = 2 + 40;

/// A scored candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MiningResult {
    /// Matching bits, see [`score`](crate::score::score).
    pub score: u32,
    /// Derived contract address.
    pub address: [u8; 20],
    /// Signature `s` scalar that produced the address.
    pub nonce_field: [u8; 32],
}

impl MiningResult {
    /// Nonce field without leading zero bytes.
    pub fn stripped_nonce(&self) -> &[u8] {
        trim_leading_zeros(&self.nonce_field)
    }

    /// Whether the result is an acceptable share at `difficulty`.
    pub fn meets_difficulty(&self, difficulty: u32) -> bool {
        self.score >= difficulty
    }

    /// Record line for results reaching the relevance threshold.
    pub fn relevant_line(&self, session: &MiningSession) -> String {
        format!(
            "{}  (d: {}): hash: {}, sigR: {}, sigS: 0x{}",
            encode_prefixed(&self.address),
            self.score,
            encode_prefixed(session.target_hash()),
            encode_prefixed(session.sig_r()),
            hex::encode(self.stripped_nonce())
        )
    }
}

impl fmt::Display for MiningResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02x}{}{}",
            self.score,
            hex::encode(self.address),
            hex::encode(self.stripped_nonce())
        )
    }
}

impl FromStr for MiningResult {
    type Err = ResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_prefix("0x").ok_or(ResultError::MissingPrefix)?;
        if !body.is_ascii() {
            return Err(ResultError::InvalidEncoding);
        }
        if body.len() < HEADER_HEX_LEN
            || body.len() % 2 != 0
            || body.len() > HEADER_HEX_LEN + 64
        {
            return Err(ResultError::InvalidLength(body.len()));
        }

        let mut score = [0u8; 1];
        let mut address = [0u8; 20];
        hex::decode_to_slice(&body[..2], &mut score).map_err(|_| ResultError::InvalidEncoding)?;
        hex::decode_to_slice(&body[2..HEADER_HEX_LEN], &mut address)
            .map_err(|_| ResultError::InvalidEncoding)?;

        let nonce = hex::decode(&body[HEADER_HEX_LEN..]).map_err(|_| ResultError::InvalidEncoding)?;
        let mut nonce_field = [0u8; 32];
        nonce_field[32 - nonce.len()..].copy_from_slice(&nonce);

        Ok(MiningResult {
            score: score[0] as u32,
            address,
            nonce_field,
        })
    }
}
