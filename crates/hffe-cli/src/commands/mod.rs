//! Command handler modules for the `hffe` CLI.
//!
//! Shared utilities used by multiple command paths live here.
//! Command-specific logic lives in the submodules.

pub mod analyze;
pub mod quotes;

use anyhow::{Context, Result};
use hffe_config::{AnalysisConfig, UnusedKeyPolicy};
use std::path::PathBuf;
use tracing::warn;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Effective analysis config plus the hash of the layers it came from.
pub struct ResolvedConfig {
    pub config: AnalysisConfig,
    /// `None` when no `--config` was given and defaults apply.
    pub config_hash: Option<String>,
}

/// Load and validate `--config` layers. Unused keys are logged, not fatal.
pub fn resolve_config(paths: &[PathBuf]) -> Result<ResolvedConfig> {
    if paths.is_empty() {
        return Ok(ResolvedConfig {
            config: AnalysisConfig::default(),
            config_hash: None,
        });
    }

    let loaded = hffe_config::load_layered_yaml(paths)?;
    let report = hffe_config::report_unused_keys(&loaded.config_json, UnusedKeyPolicy::Warn)?;
    for ptr in &report.unused_leaf_pointers {
        warn!(pointer = %ptr, "unused config key");
    }

    let config = AnalysisConfig::from_loaded(&loaded)
        .with_context(|| format!("invalid config (hash {})", loaded.config_hash))?;
    Ok(ResolvedConfig {
        config,
        config_hash: Some(loaded.config_hash),
    })
}
