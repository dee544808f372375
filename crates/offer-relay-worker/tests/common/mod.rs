//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;

pub mod mock_services;
pub mod test_data;

/// Get path to test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Load an offer document fixture
pub fn load_offer_fixture(name: &str) -> Vec<u8> {
    let path = fixtures_dir().join("offers").join(name);
    std::fs::read(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {:?}", path))
}

/// Load an event envelope fixture
pub fn load_event_fixture(name: &str) -> serde_json::Value {
    let path = fixtures_dir().join("events").join(name);
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read fixture: {:?}", path));
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("Invalid fixture {:?}: {}", path, e))
}

/// Configuration lookup backed by a fixed map instead of the process
/// environment
pub fn env_lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}
