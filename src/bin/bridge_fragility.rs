//! Bridge fragility command-line runner
//!
//! ```text
//! bridge-fragility <grid-file> <inventory-file> [options.json]
//! ```
//!
//! Writes the report to stdout; set `RUST_LOG=info` for the run summary.

use anyhow::{bail, Context, Result};
use std::io::{self, BufWriter, Write};

use bridge_fragility::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 3 {
        bail!("usage: bridge-fragility <grid-file> <inventory-file> [options.json]");
    }

    let options = match args.get(2) {
        Some(path) => EvaluationOptions::from_json_file(path)
            .with_context(|| format!("Failed to load options from {path}"))?,
        None => EvaluationOptions::default(),
    };

    let model = DamageModel::load(&args[0], options)
        .with_context(|| format!("Failed to load grid {}", args[0]))?;
    let mut bridges = read_inventory_file(&args[1])
        .with_context(|| format!("Failed to read inventory {}", args[1]))?;

    let summary = model.evaluate(&mut bridges);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    model.report(&bridges).write_to(&mut out)?;
    out.flush()?;

    eprintln!("{summary}");
    Ok(())
}
