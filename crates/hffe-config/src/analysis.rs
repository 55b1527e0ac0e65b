//! Typed view of the analysis parameters.
//!
//! ```yaml
//! jumps:
//!   alpha: 5.0
//!   threshold_exponent: 0.49
//! liquidity:
//!   strict: false
//!   conditions: [zero_bid, zero_ask, stale_prices]
//! ```
//!
//! Every key is optional; missing keys take the defaults shown.

use anyhow::{bail, Context, Result};
use hffe_md::{LiquidityChecker, LiquidityCondition};
use hffe_stats::JumpThreshold;
use serde::{Deserialize, Serialize};

use crate::LoadedConfig;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub jumps: JumpsConfig,
    pub liquidity: LiquidityConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpsConfig {
    pub alpha: f64,
    pub threshold_exponent: f64,
}

impl Default for JumpsConfig {
    fn default() -> Self {
        Self {
            alpha: JumpThreshold::DEFAULT_ALPHA,
            threshold_exponent: JumpThreshold::DEFAULT_EXPONENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidityConfig {
    pub strict: bool,
    pub conditions: Vec<String>,
}

impl Default for LiquidityConfig {
    fn default() -> Self {
        let checker = LiquidityChecker::default();
        Self {
            strict: checker.is_strict(),
            conditions: checker
                .conditions()
                .iter()
                .map(|c| c.name().to_string())
                .collect(),
        }
    }
}

impl AnalysisConfig {
    /// Deserialize and validate the merged config tree.
    pub fn from_loaded(loaded: &LoadedConfig) -> Result<Self> {
        let cfg: AnalysisConfig = serde_json::from_value(loaded.config_json.clone())
            .context("config does not match the analysis schema")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let alpha = self.jumps.alpha;
        let threshold_exponent = self.jumps.threshold_exponent;
        if !alpha.is_finite() || alpha <= 0.0 {
            bail!("jumps.alpha must be a positive finite number, got {alpha}");
        }
        if !threshold_exponent.is_finite() {
            bail!("jumps.threshold_exponent must be finite, got {threshold_exponent}");
        }
        for name in &self.liquidity.conditions {
            LiquidityCondition::from_name(name).with_context(|| {
                format!(
                    "liquidity.conditions: expected one of {:?}",
                    LiquidityCondition::ALL.map(LiquidityCondition::name)
                )
            })?;
        }
        Ok(())
    }

    pub fn threshold(&self) -> JumpThreshold {
        JumpThreshold {
            alpha: self.jumps.alpha,
            exponent: self.jumps.threshold_exponent,
        }
    }

    pub fn checker(&self) -> Result<LiquidityChecker> {
        LiquidityChecker::from_names(&self.liquidity.conditions, self.liquidity.strict)
            .context("invalid liquidity policy")
    }
}
