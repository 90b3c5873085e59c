//! Browser tests for the WASM bindings.

#![cfg(target_arch = "wasm32")]

use nickminer_wasm::NickMiner;
use wasm_bindgen_test::*;

const HASH: &str = "0x7a0bd52ac5c5a83e6b5dd8a1c9e5ac0e37d1bd5f6b5b3be9afa2d82b3a8e5b1e";
const SIG_R: &str = "0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

fn configured() -> NickMiner {
    let mut miner = NickMiner::new();
    miner
        .set_config(HASH, SIG_R, 27, "0x00", "0xff", 32, "0xdeadbeef")
        .unwrap();
    miner
}

#[wasm_bindgen_test]
fn test_unconfigured_run_reports_error() {
    let mut miner = NickMiner::new();
    assert!(!miner.is_configured());
    assert!(miner.run("0x01").starts_with('!'));
    assert!(miner.get_input().starts_with('!'));
}

#[wasm_bindgen_test]
fn test_run_and_verify() {
    let mut miner = configured();
    let result = miner.run("0x01");
    assert!(result.starts_with("0x"));
    assert_eq!(result, miner.run("0x01"));
    assert!(miner.verify("0x01", &result).unwrap());
}

#[wasm_bindgen_test]
fn test_invalid_nonce() {
    let mut miner = configured();
    assert!(miner.run("0xabc").starts_with("!invalid nonce"));
}

#[wasm_bindgen_test]
fn test_diagnostics() {
    let miner = configured();
    assert!(miner.get_input().starts_with("input: 0x7a0bd52a"));
    assert!(miner.get_sigrv().ends_with("sigV: 0x1b (27)"));
    assert_eq!(miner.get_suffix(), "suffix: 0x00");
    assert_eq!(miner.get_prefix(), "prefix: 0xff");
}

#[wasm_bindgen_test]
fn test_set_params_and_relevant_line() {
    let mut miner = NickMiner::new();
    let params = format!("nickminer|{}|{}|27|16|0x|0x00|0", HASH, SIG_R);
    miner.set_params(&params, "0x1234").unwrap();
    let result = miner.run("0x02");
    let line = miner.relevant_line(&result).unwrap().unwrap();
    assert!(line.contains("sigR: 0x79be667e"));
}

#[wasm_bindgen_test]
fn test_set_config_json() {
    let mut miner = NickMiner::new();
    let json = format!(
        r#"{{"hash":"{}","sigR":"{}","sigV":27,"count":8,"suffix":"0xff"}}"#,
        HASH, SIG_R
    );
    miner.set_config_json(&json).unwrap();
    assert!(miner.is_configured());
    assert!(miner.set_config_json("{").is_err());
}

#[wasm_bindgen_test]
fn test_params_difficulty_gates_shares_not_relevance() {
    let mut miner = NickMiner::new();
    let params = format!("nickminer|{}|{}|27|16|0x|0x00|200", HASH, SIG_R);
    miner.set_params(&params, "0x1234").unwrap();
    assert_eq!(miner.difficulty(), 200);

    let result = miner.run("0x02");
    assert!(!miner.accepts_share(&result).unwrap());
    // relevance threshold is not taken from the params string
    assert!(miner.relevant_line(&result).unwrap().is_some());
}

#[wasm_bindgen_test]
fn test_json_config_keeps_both_thresholds() {
    let mut miner = NickMiner::new();
    let json = format!(
        r#"{{"hash":"{}","sigR":"{}","sigV":27,"count":8,"prefix":"0x00","difficulty":0,"relevantDifficulty":255}}"#,
        HASH, SIG_R
    );
    miner.set_config_json(&json).unwrap();
    let result = miner.run("0x03");
    assert!(miner.accepts_share(&result).unwrap());
    assert_eq!(miner.relevant_line(&result).unwrap(), None);
}

#[wasm_bindgen_test]
fn test_sig_v_out_of_range_is_rejected() {
    let mut miner = NickMiner::new();
    assert!(miner.set_config(HASH, SIG_R, 283, "0x00", "", 4, "").is_err());
    assert!(!miner.is_configured());
}
