//! WebAssembly bindings for the nickminer vanity address miner.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Configuring a mining session from parameters, JSON or a params string
//! - Mining batches of rounds per nonce
//! - Verifying and recording results
//! - Session diagnostics and mining statistics

use wasm_bindgen::prelude::*;

pub mod miner;
pub mod state;

// Re-export main types for JS access
pub use miner::NickMiner;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
