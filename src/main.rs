//! ordinal-map - Binary Entry Point
//!
//! Reads a stored order map and an optional reorder request from JSON files,
//! applies the request and prints the resulting map on stdout.
//!
//! ```text
//! ordinal-map stored.json request.json
//! ordinal-map stored.json --min-order 100
//! ```
//!
//! Logs go to stderr. Set `RUST_LOG` to adjust the filter.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ordinal_map::{apply_mappings_with_receipt, change_min_order, normalize, store};

/// Apply drag-and-drop reorder requests to a stored order map
#[derive(Parser, Debug)]
#[command(name = "ordinal-map", version, about)]
struct Cli {
    /// Stored order map (JSON object of id -> order)
    base: PathBuf,

    /// Reorder request (JSON object of id -> desired order)
    mappings: Option<PathBuf>,

    /// Translate the result so its lowest order equals this value
    #[arg(long, allow_hyphen_values = true)]
    min_order: Option<i64>,

    /// Enable structured JSON logging
    #[arg(long, env = "ORDINAL_MAP_JSON_LOGS")]
    json_logs: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let base = store::from_json_str(&fs::read_to_string(&cli.base)?)?;
    tracing::info!(path = %cli.base.display(), len = base.len(), "loaded stored map");

    let mut result = match &cli.mappings {
        Some(path) => {
            let request = store::from_json_str(&fs::read_to_string(path)?)?;
            let (map, receipt) = apply_mappings_with_receipt(base, &request);
            tracing::info!(
                moved = receipt.moved,
                inserted = receipt.inserted,
                noop = receipt.is_noop(),
                fingerprint = %receipt.after_hex(),
                "applied reorder request"
            );
            map
        }
        None => normalize(base),
    };

    if let Some(min) = cli.min_order {
        result = change_min_order(result, min);
    }

    println!("{}", store::to_json_string_pretty(&result)?);
    Ok(())
}

fn init_tracing(json_logs: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ordinal_map=info"));

    if json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
