//! Fixed inputs of a mining session and candidate signature layout.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::codec::{self, encode_prefixed};
use crate::config::MinerConfig;
use crate::error::{CodecError, ConfigError};
use crate::hash::keccak256;

/// Longest suffix or prefix pattern (an address is 20 bytes).
pub const MAX_PATTERN_LEN: usize = 20;

/// Longest combined pattern whose maximum score still fits in one byte.
pub const MAX_COMBINED_PATTERN_LEN: usize = 31;

/// Width of the caller-supplied nonce inside the nonce field.
pub const NONCE_PREFIX_LEN: usize = 16;

/// Offset of the commitment bytes inside the nonce field.
pub const COMMITMENT_OFFSET: usize = 16;

/// Offset of the big-endian round counter inside the nonce field.
pub const ROUND_OFFSET: usize = 30;

/// Offset subtracted from the raw recovery byte.
pub const RECOVERY_BYTE_BASE: u8 = 27;

/// Everything that stays fixed while grinding candidates.
///
/// The nonce field (the signature's `s` scalar) of every candidate is laid
/// out as:
///
/// ```text
///  0..16  caller nonce, big-endian, zero-padded on the left
/// 16..30  commitment_hash[0..14]
/// 30..32  round counter, big-endian u16
/// ```
///
/// The counter overwrites `commitment_hash[14..16]` and wraps after 65536
/// rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiningSession {
    target_hash: [u8; 32],
    sig_r: [u8; 32],
    sig_v: u8,
    commitment_hash: [u8; 32],
    suffix: Vec<u8>,
    prefix: Vec<u8>,
    max_rounds: u32,
}

impl MiningSession {
    /// Build a session from raw hex inputs.
    ///
    /// `target_hash_hex` and `sig_r_hex` are right-aligned into 32 bytes;
    /// suffix and prefix keep their exact decoded length; the preimage is
    /// hashed once into the commitment.
    ///
    /// Each pattern may hold up to 20 bytes, but together they may hold at
    /// most 31 so the score fits its result byte. Longer combinations fail
    /// with [`ConfigError::PatternTooLong`], e.g. a full 20-byte suffix with
    /// a full 20-byte prefix.
    pub fn new(
        target_hash_hex: &str,
        sig_r_hex: &str,
        sig_v: u8,
        suffix_hex: &str,
        prefix_hex: &str,
        max_rounds: u32,
        preimage_hex: &str,
    ) -> Result<Self, ConfigError> {
        let target_hash =
            codec::decode_right_aligned(target_hash_hex).map_err(ConfigError::codec("hash"))?;
        let sig_r = codec::decode_right_aligned(sig_r_hex).map_err(ConfigError::codec("sigR"))?;
        let suffix = codec::decode_bounded(suffix_hex, MAX_PATTERN_LEN)
            .map_err(ConfigError::codec("suffix"))?;
        let prefix = codec::decode_bounded(prefix_hex, MAX_PATTERN_LEN)
            .map_err(ConfigError::codec("prefix"))?;
        let preimage = codec::decode(preimage_hex).map_err(ConfigError::codec("preimage"))?;

        if suffix.len() + prefix.len() > MAX_COMBINED_PATTERN_LEN {
            return Err(ConfigError::PatternTooLong {
                suffix: suffix.len(),
                prefix: prefix.len(),
                max: MAX_COMBINED_PATTERN_LEN,
            });
        }

        Ok(MiningSession {
            target_hash,
            sig_r,
            sig_v,
            commitment_hash: keccak256(&preimage),
            suffix,
            prefix,
            max_rounds,
        })
    }

    /// Build a session from textual parameters.
    pub fn from_config(config: &MinerConfig) -> Result<Self, ConfigError> {
        Self::new(
            &config.hash,
            &config.sig_r,
            config.sig_v,
            &config.suffix,
            &config.prefix,
            config.count,
            &config.preimage,
        )
    }

    pub fn target_hash(&self) -> &[u8; 32] {
        &self.target_hash
    }

    pub fn sig_r(&self) -> &[u8; 32] {
        &self.sig_r
    }

    /// Raw recovery byte as configured.
    pub fn sig_v(&self) -> u8 {
        self.sig_v
    }

    /// Recovery id passed to the recovery backend.
    ///
    /// Bytes other than 27..=30 wrap to ids the backend rejects.
    pub fn recovery_id(&self) -> u8 {
        self.sig_v.wrapping_sub(RECOVERY_BYTE_BASE)
    }

    pub fn commitment_hash(&self) -> &[u8; 32] {
        &self.commitment_hash
    }

    pub fn suffix(&self) -> &[u8] {
        &self.suffix
    }

    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Caller nonce followed by the commitment bytes, before any round
    /// counter is written.
    pub fn base_nonce_field(&self, nonce: &[u8; NONCE_PREFIX_LEN]) -> [u8; 32] {
        let mut field = [0u8; 32];
        field[..NONCE_PREFIX_LEN].copy_from_slice(nonce);
        field[COMMITMENT_OFFSET..].copy_from_slice(&self.commitment_hash[..32 - COMMITMENT_OFFSET]);
        field
    }

    /// Decode a caller nonce (up to 16 bytes, right-aligned).
    pub fn parse_nonce(nonce_hex: &str) -> Result<[u8; NONCE_PREFIX_LEN], CodecError> {
        codec::decode_right_aligned(nonce_hex)
    }

    /// `input: 0x<hash>`
    pub fn describe_input(&self) -> String {
        format!("input: {}", encode_prefixed(&self.target_hash))
    }

    /// `sigR: 0x<r>, sigV: 0x1b (27)`
    pub fn describe_sig(&self) -> String {
        format!(
            "sigR: {}, sigV: 0x{:02x} ({})",
            encode_prefixed(&self.sig_r),
            self.sig_v,
            self.sig_v
        )
    }

    /// `suffix: 0x<suffix>`
    pub fn describe_suffix(&self) -> String {
        format!("suffix: {}", encode_prefixed(&self.suffix))
    }

    /// `prefix: 0x<prefix>`
    pub fn describe_prefix(&self) -> String {
        format!("prefix: {}", encode_prefixed(&self.prefix))
    }

    /// `preimage: 0x<commitment hash>`
    pub fn describe_preimage(&self) -> String {
        format!("preimage: {}", encode_prefixed(&self.commitment_hash))
    }
}

/// Write the round counter into its slot of a nonce field.
#[inline]
pub fn set_round(field: &mut [u8; 32], round: u32) {
    field[ROUND_OFFSET..].copy_from_slice(&(round as u16).to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> MiningSession {
        MiningSession::new("0x01", "0x02", 27, "0xffff", "0xab", 10, "0xcafe").unwrap()
    }

    #[test]
    fn test_new_pads_fixed_fields() {
        let s = session();
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(s.target_hash(), &expected);
        expected[31] = 2;
        assert_eq!(s.sig_r(), &expected);
        assert_eq!(s.suffix(), &[0xff, 0xff]);
        assert_eq!(s.prefix(), &[0xab]);
        assert_eq!(s.max_rounds(), 10);
        assert_eq!(s.commitment_hash(), &keccak256(&[0xca, 0xfe]));
    }

    #[test]
    fn test_recovery_id_normalization() {
        assert_eq!(session().recovery_id(), 0);
        let s = MiningSession::new("", "", 28, "", "", 0, "").unwrap();
        assert_eq!(s.recovery_id(), 1);
        let s = MiningSession::new("", "", 0, "", "", 0, "").unwrap();
        assert_eq!(s.recovery_id(), 229);
    }

    #[test]
    fn test_rejects_invalid_input() {
        let err = MiningSession::new("0x1", "", 27, "", "", 1, "").unwrap_err();
        assert_eq!(
            err,
            ConfigError::Codec {
                field: "hash",
                source: CodecError::InvalidEncoding
            }
        );

        let long = "00".repeat(21);
        let err = MiningSession::new("", "", 27, &long, "", 1, "").unwrap_err();
        assert!(matches!(err, ConfigError::Codec { field: "suffix", .. }));

        let twenty = "00".repeat(20);
        let twelve = "00".repeat(12);
        let err = MiningSession::new("", "", 27, &twenty, &twelve, 1, "").unwrap_err();
        assert!(matches!(err, ConfigError::PatternTooLong { suffix: 20, prefix: 12, .. }));

        let err = MiningSession::new("", "", 27, &twenty, &twenty, 1, "").unwrap_err();
        assert!(matches!(err, ConfigError::PatternTooLong { suffix: 20, prefix: 20, max: 31 }));

        let eleven = "00".repeat(11);
        assert!(MiningSession::new("", "", 27, &twenty, &eleven, 1, "").is_ok());
    }

    #[test]
    fn test_nonce_field_layout() {
        let s = session();
        let nonce = MiningSession::parse_nonce("0x0102").unwrap();
        let mut field = s.base_nonce_field(&nonce);

        assert_eq!(&field[..14], &[0u8; 14]);
        assert_eq!(&field[14..16], &[1, 2]);
        assert_eq!(&field[16..32], &s.commitment_hash()[..16]);

        set_round(&mut field, 0x1234);
        assert_eq!(&field[16..30], &s.commitment_hash()[..14]);
        assert_eq!(&field[30..], &[0x12, 0x34]);

        // counter is 16 bits wide
        set_round(&mut field, 0x1_0005);
        assert_eq!(&field[30..], &[0x00, 0x05]);
    }

    #[test]
    fn test_parse_nonce_too_long() {
        let long = "11".repeat(17);
        assert_eq!(
            MiningSession::parse_nonce(&long),
            Err(CodecError::TooLong { max: 16, actual: 17 })
        );
    }

    #[test]
    fn test_describe() {
        let s = session();
        assert_eq!(
            s.describe_input(),
            "input: 0x0000000000000000000000000000000000000000000000000000000000000001"
        );
        assert!(s.describe_sig().ends_with(", sigV: 0x1b (27)"));
        assert_eq!(s.describe_suffix(), "suffix: 0xffff");
        assert_eq!(s.describe_prefix(), "prefix: 0xab");
        assert!(s.describe_preimage().starts_with("preimage: 0x"));
        assert_eq!(s.describe_preimage().len(), "preimage: 0x".len() + 64);
    }
}
