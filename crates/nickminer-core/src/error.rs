//! Error types for the mining engine.

use alloc::string::String;
use thiserror::Error;

/// Hex decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Odd length or a non-hex digit.
    #[error("invalid hex encoding")]
    InvalidEncoding,
    /// Decoded value does not fit the destination field.
    #[error("value too long: {actual} bytes, max {max}")]
    TooLong { max: usize, actual: usize },
}

impl From<hex::FromHexError> for CodecError {
    fn from(_: hex::FromHexError) -> Self {
        CodecError::InvalidEncoding
    }
}

/// Session configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A hex field failed to decode.
    #[error("invalid {field}: {source}")]
    Codec {
        field: &'static str,
        #[source]
        source: CodecError,
    },
    /// Suffix and prefix together exceed what a one-byte score can express.
    #[error("suffix ({suffix} bytes) and prefix ({prefix} bytes) exceed {max} bytes combined")]
    PatternTooLong {
        suffix: usize,
        prefix: usize,
        max: usize,
    },
    /// Malformed parameter string.
    #[error("invalid mining parameters: {0}")]
    InvalidParams(String),
}

impl ConfigError {
    pub(crate) fn codec(field: &'static str) -> impl FnOnce(CodecError) -> ConfigError {
        move |source| ConfigError::Codec { field, source }
    }
}

/// Failures of a single signature recovery step.
///
/// These never abort a mining run; the affected round is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecoveryError {
    /// r or s is zero or not below the curve order.
    #[error("failed to parse signature")]
    InvalidSignature,
    /// Recovery id outside 0..=3.
    #[error("invalid recovery id {0}")]
    InvalidRecoveryId(u8),
    /// No public key matches the signature.
    #[error("failed to recover public key")]
    RecoveryFailed,
}

/// Errors parsing a formatted mining result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultError {
    /// Missing the `0x` marker.
    #[error("result must start with 0x")]
    MissingPrefix,
    /// Too short, or a nonce part that is not whole bytes or exceeds 32 bytes.
    #[error("invalid result length {0}")]
    InvalidLength(usize),
    /// Non-hex content.
    #[error("invalid result encoding")]
    InvalidEncoding,
}

/// Errors surfaced at the string boundary of the miner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid nonce: {0}")]
    Nonce(#[from] CodecError),
    #[error(transparent)]
    Result(#[from] ResultError),
}

/// Sentinel that starts every error string returned across the boundary.
pub const ERROR_SENTINEL: char = '!';

impl MinerError {
    /// Render as a boundary error string (`!` followed by the message).
    pub fn to_boundary_string(&self) -> String {
        alloc::format!("{}{}", ERROR_SENTINEL, self)
    }
}
