// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::allergens::JsonAllergenStore;
use crate::config::ScannerConfig;
use crate::detection::AllergenDetector;

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Label image (PNG, JPEG, ...)
    pub image: PathBuf,

    /// Write the annotated image here
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Allergen list (defaults to ALLERGEN_FILE)
    #[arg(long, env = "ALLERGEN_FILE")]
    pub allergen_file: Option<PathBuf>,

    /// Print the normalized label text
    #[arg(long)]
    pub show_text: bool,
}

pub async fn run_detect(args: DetectArgs) -> Result<()> {
    let mut config = ScannerConfig::from_env();
    if let Some(path) = args.allergen_file {
        config.allergen_file = path;
    }

    let store = JsonAllergenStore::open(&config.allergen_file).await?;
    let allergens = store.list().await;
    if allergens.is_empty() {
        println!("⚠️  Allergen list {} is empty", config.allergen_file.display());
    }

    let bytes = tokio::fs::read(&args.image)
        .await
        .with_context(|| format!("failed to read {}", args.image.display()))?;

    let detector = AllergenDetector::from_config(&config)?;
    let result = tokio::task::spawn_blocking(move || detector.detect_bytes(&bytes, &allergens))
        .await??;

    if args.show_text {
        println!("Text: {}", result.normalized_text);
    }

    if result.found_allergens.is_empty() {
        println!("✅ No allergens found");
    } else {
        println!("⚠️  Allergens found:");
        for allergen in &result.found_allergens {
            println!("  - {}", allergen);
        }
    }

    if let Some(output) = args.output {
        result
            .annotated_image
            .save(&output)
            .with_context(|| format!("failed to write {}", output.display()))?;
        info!(
            "Annotated image written to {} ({} markers)",
            output.display(),
            result.markers_drawn()
        );
        println!("Annotated image: {}", output.display());
    }

    Ok(())
}
