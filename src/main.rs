mod app;
mod color;
mod ui;

use agro_panda::config::GeneratorConfig;
use agro_panda::data::DatasetCache;
use anyhow::{Context, Result};
use app::AgroPandaApp;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let config = GeneratorConfig::from_env().context("reading generator configuration")?;
    let cache = DatasetCache::new(config);
    // Configuration errors abort startup instead of surfacing mid-session.
    cache.dataset().context("generating synthetic dataset")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Agro Panda – Crop Market Analytics",
        options,
        Box::new(|_cc| Ok(Box::new(AgroPandaApp::new(cache)?))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
