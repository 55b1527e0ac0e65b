use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "hffe")]
#[command(about = "High-frequency return analysis CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an intraday price CSV (date,time,price per line)
    Analyze {
        /// Price CSV path
        path: PathBuf,

        /// Layered config paths in merge order
        #[arg(long = "config")]
        config_paths: Vec<PathBuf>,

        /// Override jumps.alpha
        #[arg(long)]
        alpha: Option<f64>,

        /// Print the summary as JSON instead of key=value lines
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Screen an option quote CSV (bid,ask,type per line) for liquidity
    CheckQuotes {
        /// Quote CSV path
        path: PathBuf,

        /// Layered config paths in merge order
        #[arg(long = "config")]
        config_paths: Vec<PathBuf>,

        /// Fail on mixed call/put series instead of rejecting them
        #[arg(long, default_value_t = false)]
        strict: bool,
    },

    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order (base -> overrides)
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Analyze {
            path,
            config_paths,
            alpha,
            json,
        } => commands::analyze::run(&path, &config_paths, alpha, json),

        Commands::CheckQuotes {
            path,
            config_paths,
            strict,
        } => commands::quotes::run(&path, &config_paths, strict),

        Commands::ConfigHash { paths } => {
            let loaded = hffe_config::load_layered_yaml(&paths)?;
            println!("config_hash={}", loaded.config_hash);
            println!("{}", loaded.canonical_json);
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
