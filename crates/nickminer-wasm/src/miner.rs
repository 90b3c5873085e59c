//! Mining controller for the WASM miner.

use nickminer_core::{MinerConfig, MinerError, MiningResult, MiningSession, ERROR_SENTINEL};
use wasm_bindgen::prelude::*;

use crate::state::{MiningStats, SessionInfo};

type Miner = nickminer_core::Miner;

/// The main mining controller.
///
/// Each instance owns one session; configuring again replaces it and resets
/// the statistics.
#[wasm_bindgen]
pub struct NickMiner {
    /// The configured miner, if any.
    miner: Option<Miner>,
    /// Minimum score for an accepted share.
    difficulty: u32,
    /// Minimum score for relevant results.
    relevant_difficulty: u32,
    /// Mining statistics.
    stats: MiningStats,
}

#[wasm_bindgen]
impl NickMiner {
    /// Create an unconfigured miner.
    #[wasm_bindgen(constructor)]
    pub fn new() -> NickMiner {
        NickMiner {
            miner: None,
            difficulty: 0,
            relevant_difficulty: 0,
            stats: MiningStats::new(),
        }
    }

    /// Configure the session from individual parameters.
    ///
    /// # Arguments
    /// * `input_hash` - Message hash the signatures recover against
    /// * `sig_r` - Fixed signature r scalar
    /// * `sig_v` - Raw recovery byte (27 or 28), rejected outside 0..=255
    /// * `suffix` - Desired address suffix
    /// * `prefix` - Desired address prefix
    /// * `rounds` - Rounds per `run` call; negative values mean none
    /// * `preimage` - Secret bound into every candidate
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn set_config(
        &mut self,
        input_hash: &str,
        sig_r: &str,
        sig_v: i32,
        suffix: &str,
        prefix: &str,
        rounds: i32,
        preimage: &str,
    ) -> Result<(), JsValue> {
        let sig_v = u8::try_from(sig_v)
            .map_err(|_| JsValue::from_str(&format!("Invalid sigV: {}", sig_v)))?;
        let session = MiningSession::new(
            input_hash,
            sig_r,
            sig_v,
            suffix,
            prefix,
            u32::try_from(rounds).unwrap_or(0),
            preimage,
        )
        .map_err(to_js_error)?;
        self.install(session, 0, 0);
        Ok(())
    }

    /// Configure the session from a JSON `MinerConfig`.
    #[wasm_bindgen]
    pub fn set_config_json(&mut self, json: &str) -> Result<(), JsValue> {
        let config: MinerConfig = serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        self.configure(&config)
    }

    /// Configure the session from a server parameter string and preimage.
    #[wasm_bindgen]
    pub fn set_params(&mut self, params: &str, preimage: &str) -> Result<(), JsValue> {
        let config = MinerConfig::from_params_str(params)
            .map_err(to_js_error)?
            .with_preimage(preimage);
        self.configure(&config)
    }

    /// Mine one batch of rounds for a nonce.
    ///
    /// Returns `0x<score><address><nonce>`, or a `!`-prefixed error message.
    #[wasm_bindgen]
    pub fn run(&mut self, nonce: &str) -> String {
        let Some(miner) = self.miner.as_ref() else {
            return format!("{}no session configured", ERROR_SENTINEL);
        };

        let start = js_sys::Date::now();
        match miner.try_run(nonce) {
            Ok(result) => {
                let rounds = miner.session().max_rounds();
                self.stats
                    .record_run(rounds, &result, js_sys::Date::now() - start);
                result.to_string()
            }
            Err(err) => err.to_boundary_string(),
        }
    }

    /// Verify a claimed result for a nonce by mining it again.
    #[wasm_bindgen]
    pub fn verify(&self, nonce: &str, claimed: &str) -> Result<bool, JsValue> {
        self.configured()?
            .verify(nonce, claimed)
            .map_err(to_js_error)
    }

    /// Whether a result string is an acceptable share at the configured
    /// difficulty.
    #[wasm_bindgen]
    pub fn accepts_share(&self, result: &str) -> Result<bool, JsValue> {
        self.configured()?;
        let result: MiningResult = result
            .parse()
            .map_err(|e| to_js_error(MinerError::Result(e)))?;
        Ok(result.meets_difficulty(self.difficulty))
    }

    /// Share difficulty of the configured session.
    #[wasm_bindgen(getter)]
    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Record line for a result if it reaches the relevance threshold.
    #[wasm_bindgen]
    pub fn relevant_line(&self, result: &str) -> Result<Option<String>, JsValue> {
        let miner = self.configured()?;
        let result: MiningResult = result
            .parse()
            .map_err(|e| to_js_error(MinerError::Result(e)))?;
        if result.score < self.relevant_difficulty {
            return Ok(None);
        }
        Ok(Some(result.relevant_line(miner.session())))
    }

    /// `input: 0x<hash>`
    #[wasm_bindgen]
    pub fn get_input(&self) -> String {
        self.describe(MiningSession::describe_input)
    }

    /// `sigR: 0x<r>, sigV: 0x<v> (<v>)`
    #[wasm_bindgen]
    pub fn get_sigrv(&self) -> String {
        self.describe(MiningSession::describe_sig)
    }

    /// `suffix: 0x<suffix>`
    #[wasm_bindgen]
    pub fn get_suffix(&self) -> String {
        self.describe(MiningSession::describe_suffix)
    }

    /// `prefix: 0x<prefix>`
    #[wasm_bindgen]
    pub fn get_prefix(&self) -> String {
        self.describe(MiningSession::describe_prefix)
    }

    /// `preimage: 0x<commitment hash>`
    #[wasm_bindgen]
    pub fn get_preimage(&self) -> String {
        self.describe(MiningSession::describe_preimage)
    }

    /// Get the configured session as a JS object.
    #[wasm_bindgen]
    pub fn get_session_info(&self) -> Result<JsValue, JsValue> {
        SessionInfo::from_session(self.configured()?.session()).to_js()
    }

    /// Get current mining statistics.
    #[wasm_bindgen]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        self.stats.to_js()
    }

    /// Get the formatted round rate.
    #[wasm_bindgen]
    pub fn get_round_rate_display(&self) -> String {
        self.stats.format_round_rate()
    }

    /// Whether a session is configured.
    #[wasm_bindgen(getter)]
    pub fn is_configured(&self) -> bool {
        self.miner.is_some()
    }

    /// Drop the session and statistics.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.miner = None;
        self.difficulty = 0;
        self.relevant_difficulty = 0;
        self.stats = MiningStats::new();
    }
}

impl NickMiner {
    fn configure(&mut self, config: &MinerConfig) -> Result<(), JsValue> {
        let session = MiningSession::from_config(config).map_err(to_js_error)?;
        self.install(session, config.difficulty, config.relevant_difficulty);
        Ok(())
    }

    fn install(&mut self, session: MiningSession, difficulty: u32, relevant_difficulty: u32) {
        console_log(&format!(
            "nickminer configured: {}, {}, rounds: {}",
            session.describe_suffix(),
            session.describe_prefix(),
            session.max_rounds()
        ));
        self.miner = Some(Miner::new(session));
        self.difficulty = difficulty;
        self.relevant_difficulty = relevant_difficulty;
        self.stats = MiningStats::new();
    }

    fn configured(&self) -> Result<&Miner, JsValue> {
        self.miner
            .as_ref()
            .ok_or_else(|| JsValue::from_str("No session configured"))
    }

    fn describe(&self, f: fn(&MiningSession) -> String) -> String {
        match &self.miner {
            Some(miner) => f(miner.session()),
            None => format!("{}no session configured", ERROR_SENTINEL),
        }
    }
}

impl Default for NickMiner {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js_error(err: impl Into<MinerError>) -> JsValue {
    JsValue::from_str(&err.into().to_string())
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
