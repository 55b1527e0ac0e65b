//! `hffe check-quotes`: liquidity screen over one quote CSV.

use anyhow::{Context, Result};
use hffe_md::{LiquidityFailure, LiquidityVerdict};
use std::path::{Path, PathBuf};

use super::resolve_config;

pub fn run(path: &Path, config_paths: &[PathBuf], strict: bool) -> Result<()> {
    let resolved = resolve_config(config_paths)?;
    let checker = resolved.config.checker()?;
    let checker = if strict { checker.strict(true) } else { checker };

    let quotes = hffe_md::parse_quotes_csv_file(path)
        .with_context(|| format!("load quote series '{}'", path.display()))?;

    let verdict = checker
        .evaluate(&quotes)
        .with_context(|| format!("strict liquidity check failed for '{}'", path.display()))?;

    match verdict {
        LiquidityVerdict::Accepted => println!("ACCEPTED"),
        LiquidityVerdict::Rejected { failure } => match failure {
            LiquidityFailure::Condition { condition } => println!("REJECTED: {}", condition.name()),
            LiquidityFailure::MixedOptionType { .. } => println!("REJECTED: mixed_option_type"),
        },
    }
    Ok(())
}
