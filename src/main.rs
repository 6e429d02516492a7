// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use allergen_scanner::{
    allergens::JsonAllergenStore,
    api::{start_server, AppState},
    config::ScannerConfig,
    detection::AllergenDetector,
    version,
};
use anyhow::Result;
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting {}", version::get_version_string());

    let config = ScannerConfig::from_env();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    let detector = AllergenDetector::from_config(&config)?;
    let registry = JsonAllergenStore::open(&config.allergen_file).await?;

    info!(
        "OCR: {} ({}), confidence threshold {}, timeout {}ms",
        config.tesseract_bin, config.ocr_language, config.confidence_threshold, config.detect_timeout_ms
    );
    println!("✅ Listening on http://{}", config.bind_address());

    let state = AppState::new(detector, registry, config);
    tokio::select! {
        result = start_server(state) => result?,
        _ = tokio::signal::ctrl_c() => {
            println!("\n👋 Shutting down");
        }
    }

    Ok(())
}
