//! Mining parameters in their textual form.

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::{String, ToString};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Algorithm tag at the start of a PoW parameter string.
pub const PARAMS_ALGO: &str = "nickminer";

/// Parameters of a mining session as supplied by the faucet server.
///
/// All byte fields are hex text; decoding and validation happen in
/// [`MiningSession::from_config`](crate::MiningSession::from_config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MinerConfig {
    /// Message hash the signatures are recovered against.
    pub hash: String,
    /// First signature scalar.
    pub sig_r: String,
    /// Raw recovery byte (27 or 28).
    pub sig_v: u8,
    /// Rounds per mining call.
    pub count: u32,
    /// Desired address suffix.
    pub suffix: String,
    /// Desired address prefix.
    pub prefix: String,
    /// Secret preimage bound into every candidate.
    pub preimage: String,
    /// Share difficulty: minimum score for a result to be accepted.
    pub difficulty: u32,
    /// Minimum score for a result to be recorded as relevant.
    ///
    /// Server-side threshold, never carried in the parameter string.
    pub relevant_difficulty: u32,
}

impl MinerConfig {
    /// Parse `nickminer|<hash>|<sigR>|<sigV>|<count>|<suffix>|<prefix>|<difficulty>`.
    ///
    /// The preimage and the relevance threshold are not part of the parameter
    /// string and are left empty.
    pub fn from_params_str(params: &str) -> Result<Self, ConfigError> {
        let fields: alloc::vec::Vec<&str> = params.split('|').collect();
        if fields.len() != 8 {
            return Err(ConfigError::InvalidParams(format!(
                "expected 8 fields, got {}",
                fields.len()
            )));
        }
        if fields[0] != PARAMS_ALGO {
            return Err(ConfigError::InvalidParams(format!(
                "unexpected algorithm {:?}",
                fields[0]
            )));
        }

        Ok(MinerConfig {
            hash: fields[1].to_owned(),
            sig_r: fields[2].to_owned(),
            sig_v: parse_int(fields[3], "sigV")?,
            count: parse_int(fields[4], "count")?,
            suffix: fields[5].to_owned(),
            prefix: fields[6].to_owned(),
            preimage: String::new(),
            difficulty: parse_int(fields[7], "difficulty")?,
            relevant_difficulty: 0,
        })
    }

    /// Render back into the pipe-separated parameter string.
    pub fn to_params_str(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}",
            PARAMS_ALGO,
            self.hash,
            self.sig_r,
            self.sig_v,
            self.count,
            self.suffix,
            self.prefix,
            self.difficulty
        )
    }

    /// Same parameters with a different preimage.
    pub fn with_preimage(mut self, preimage: &str) -> Self {
        self.preimage = preimage.to_string();
        self
    }
}

fn parse_int<T: core::str::FromStr>(value: &str, name: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidParams(format!("invalid {}: {:?}", name, value)))
}
