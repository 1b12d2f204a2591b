//! Write the synthetic dataset to CSV or JSON.
//!
//! Usage: `export_dataset [PATH]` (default `synthetic_dataset.csv`).
//! Generation honours the same `AGRO_PANDA_*` variables as the dashboard.

use std::path::PathBuf;

use anyhow::{Context, Result};

use agro_panda::config::GeneratorConfig;
use agro_panda::data::export::write_records;
use agro_panda::data::DatasetCache;

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("synthetic_dataset.csv"));

    let config = GeneratorConfig::from_env().context("reading generator configuration")?;
    let cache = DatasetCache::new(config);
    let dataset = cache.dataset().context("generating synthetic dataset")?;

    write_records(&output_path, &dataset.records)?;
    log::info!("Wrote {} records to {}", dataset.len(), output_path.display());

    let seed = cache
        .config()
        .seed
        .map_or_else(|| "entropy".to_string(), |s| s.to_string());
    println!(
        "Wrote {} records ({} products, {} companies, seed {seed}) to {}",
        dataset.len(),
        dataset.products.len(),
        dataset.companies.len(),
        output_path.display()
    );
    Ok(())
}
