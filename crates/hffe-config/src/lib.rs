//! hffe-config
//!
//! Layered YAML configuration for analysis runs. Documents are merged in
//! order (later overrides earlier, mappings merged key by key), converted to
//! JSON, serialized canonically and hashed, so a run can be tied to the exact
//! parameters it used.

use anyhow::{Context, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;

mod analysis;
mod unused;

pub use analysis::{AnalysisConfig, JumpsConfig, LiquidityConfig};
pub use unused::{consumed_pointers, report_unused_keys, UnusedKeyPolicy, UnusedKeyReport};

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// SHA-256 of `canonical_json`, lowercase hex.
    pub config_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
}

pub fn load_layered_yaml<P: AsRef<std::path::Path>>(paths: &[P]) -> Result<LoadedConfig> {
    let docs = paths
        .iter()
        .map(|p| {
            let p = p.as_ref();
            fs::read_to_string(p).with_context(|| format!("failed to read yaml path: {}", p.display()))
        })
        .collect::<Result<Vec<String>>>()?;

    let doc_refs: Vec<&str> = docs.iter().map(String::as_str).collect();
    load_layered_yaml_from_strings(&doc_refs)
}

pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    let mut merged = serde_json::json!({});
    for (i, raw) in yaml_docs.iter().enumerate() {
        let v_yaml: serde_yaml::Value =
            serde_yaml::from_str(raw).with_context(|| format!("invalid yaml (layer {i})"))?;
        let v_json = serde_json::to_value(v_yaml).context("yaml->json conversion failed")?;
        // An empty document parses as null; treat it as an empty layer.
        if !v_json.is_null() {
            merged = deep_merge(merged, v_json);
        }
    }

    let canonical_json = canonicalize_json(&merged)?;
    let config_hash = sha256_hex(canonical_json.as_bytes());
    Ok(LoadedConfig {
        config_hash,
        canonical_json,
        config_json: merged,
    })
}

fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (k, v) in overlay_map {
                let prev = base_map.remove(&k).unwrap_or(Value::Null);
                base_map.insert(k, deep_merge(prev, v));
            }
            Value::Object(base_map)
        }
        (_, other) => other,
    }
}

/// Compact JSON. `serde_json::Map` is key-sorted, so equal trees serialize
/// identically regardless of source key order.
fn canonicalize_json(v: &Value) -> Result<String> {
    serde_json::to_string(v).context("canonical json serialize failed")
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
