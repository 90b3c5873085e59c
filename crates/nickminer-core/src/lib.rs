//! Signature-forgery vanity address mining.
//!
//! Instead of searching private keys, the miner fixes a signature's `r`
//! scalar and message hash and grinds the `s` scalar. Every valid candidate
//! recovers to some public key; the CREATE address of that key at nonce 0 is
//! scored against a desired suffix and prefix.
//!
//! This crate provides:
//! - Hex decoding with explicit validation
//! - Keccak-256 and CREATE address derivation
//! - Public key recovery behind the [`KeyRecovery`] trait
//! - Bit-level suffix/prefix scoring
//! - The mining loop and its `0x<score><address><nonce>` result format

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod address;
pub mod codec;
pub mod config;
pub mod error;
pub mod hash;
pub mod miner;
pub mod recovery;
pub mod result;
pub mod score;
pub mod session;

pub use address::{create_address, deployer_from_public_key};
pub use config::MinerConfig;
pub use error::{CodecError, ConfigError, MinerError, RecoveryError, ResultError, ERROR_SENTINEL};
pub use hash::keccak256;
pub use miner::Miner;
pub use recovery::{KeyRecovery, Secp256k1Recovery};
pub use result::MiningResult;
pub use score::score;
pub use session::MiningSession;
