//! JS-facing state snapshots for the miner.

use nickminer_core::codec::encode_prefixed;
use nickminer_core::score::max_score;
use nickminer_core::{MiningResult, MiningSession};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Mining statistics accumulated across runs of one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MiningStats {
    /// Number of completed `run` calls.
    pub runs: u32,
    /// Total candidate rounds evaluated.
    pub total_rounds: u64,
    /// Rounds per second over all runs.
    pub round_rate: f64,
    /// Total time spent mining in milliseconds.
    pub elapsed_ms: f64,
    /// Best score seen in any run.
    pub best_score: u32,
    /// Formatted result of the best run.
    pub best_result: Option<String>,
}

impl MiningStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for a finished run.
    pub fn record_run(&mut self, rounds: u32, result: &MiningResult, elapsed_ms: f64) {
        self.runs += 1;
        self.total_rounds += rounds as u64;
        self.elapsed_ms += elapsed_ms;
        if self.elapsed_ms > 0.0 {
            self.round_rate = (self.total_rounds as f64) / (self.elapsed_ms / 1000.0);
        }
        if result.score > self.best_score {
            self.best_score = result.score;
            self.best_result = Some(result.to_string());
        }
    }

    /// Format the round rate for display.
    pub fn format_round_rate(&self) -> String {
        if self.round_rate >= 1_000_000.0 {
            format!("{:.2} MR/s", self.round_rate / 1_000_000.0)
        } else if self.round_rate >= 1_000.0 {
            format!("{:.2} KR/s", self.round_rate / 1_000.0)
        } else {
            format!("{:.2} R/s", self.round_rate)
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// Configured session summary for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    /// Target message hash.
    pub hash: String,
    /// Signature r scalar.
    pub sig_r: String,
    /// Raw recovery byte.
    pub sig_v: u8,
    /// Desired suffix.
    pub suffix: String,
    /// Desired prefix.
    pub prefix: String,
    /// Rounds per run.
    pub rounds: u32,
    /// Commitment hash of the preimage.
    pub commitment: String,
    /// Highest reachable score.
    pub max_score: u32,
}

impl SessionInfo {
    pub fn from_session(session: &MiningSession) -> Self {
        SessionInfo {
            hash: encode_prefixed(session.target_hash()),
            sig_r: encode_prefixed(session.sig_r()),
            sig_v: session.sig_v(),
            suffix: encode_prefixed(session.suffix()),
            prefix: encode_prefixed(session.prefix()),
            rounds: session.max_rounds(),
            commitment: encode_prefixed(session.commitment_hash()),
            max_score: max_score(session.suffix().len(), session.prefix().len()),
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}
