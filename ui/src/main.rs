#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::fs;

use bodega_business::{TableConfig, sample_products};
use bodega_ui::state::State;
use log::{info, warn};

#[global_allocator]
static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Path of an optional JSON file with the product table configuration.
const TABLE_CONFIG_ENV: &str = "BODEGA_TABLE_CONFIG";

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let config = load_table_config();

    let native_options = eframe::NativeOptions {
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 640.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bodega",
        native_options,
        Box::new(move |_cc| {
            let state = State::with_config(sample_products(), config);
            let app = bodega_ui::BodegaApp::new(state);
            Ok(Box::new(app))
        }),
    )
}

/// Reads the table configuration named by `BODEGA_TABLE_CONFIG`, falling back
/// to the defaults when the variable is unset or the file is unusable.
fn load_table_config() -> TableConfig {
    let Ok(path) = std::env::var(TABLE_CONFIG_ENV) else {
        return TableConfig::default();
    };

    let input = match fs::read_to_string(&path) {
        Ok(input) => input,
        Err(err) => {
            warn!("cannot read table config {path}: {err}");
            return TableConfig::default();
        }
    };

    match TableConfig::from_json(&input) {
        Ok(config) => {
            info!("loaded table config from {path}");
            config
        }
        Err(err) => {
            warn!("invalid table config {path}: {err}");
            TableConfig::default()
        }
    }
}
