//! `hffe analyze`: run the full pipeline over one price CSV.

use anyhow::Result;
use hffe_stats::StockSummary;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::resolve_config;

#[derive(Serialize)]
struct AnalyzeReport {
    config_hash: Option<String>,
    #[serde(flatten)]
    summary: StockSummary,
}

pub fn run(path: &Path, config_paths: &[PathBuf], alpha: Option<f64>, json: bool) -> Result<()> {
    let mut resolved = resolve_config(config_paths)?;
    if let Some(alpha) = alpha {
        resolved.config.jumps.alpha = alpha;
        resolved.config.validate()?;
    }

    let stock = hffe_md::load_stock(path, resolved.config.threshold())?;
    tracing::info!(stock = %stock, "analysis complete");

    let report = AnalyzeReport {
        config_hash: resolved.config_hash,
        summary: stock.summary(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}

fn print_text(report: &AnalyzeReport) {
    let s = &report.summary;
    println!("source={}", s.source);
    if let Some(hash) = &report.config_hash {
        println!("config_hash={hash}");
    }
    println!("alpha={}", s.alpha);
    println!("threshold_exponent={}", s.threshold_exponent);
    println!("prices_per_day={}", s.total.prices);
    println!("returns_per_day={}", s.total.returns);
    println!("days={}", s.total.days);
    println!("jumps={}", s.total.jumps);
    println!("diffusive={}", s.total.diffusive);
    println!("first={}", opt_dt(s.first));
    println!("last={}", opt_dt(s.last));

    for (day, ((rv, bv), jumps)) in s.rv.iter().zip(&s.bv).zip(&s.jumps_per_day).enumerate() {
        println!("day={day} rv={rv:.6e} bv={bv:.6e} jumps={jumps}");
    }
    let tod: Vec<String> = s.tod.iter().map(|v| format!("{v:.4}")).collect();
    println!("tod={}", tod.join(","));
}

fn opt_dt(dt: Option<chrono::NaiveDateTime>) -> String {
    dt.map(|d| d.to_string()).unwrap_or_else(|| "null".to_string())
}
