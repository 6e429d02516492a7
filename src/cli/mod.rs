// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod allergens;
pub mod detect;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Allergen Scanner CLI
#[derive(Parser, Debug)]
#[command(name = "allergen-cli")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Scan food labels for allergens and manage the allergen list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a label image for allergens
    Detect(detect::DetectArgs),

    /// Manage the allergen list
    #[command(subcommand)]
    Allergens(allergens::AllergenCommand),
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Detect(args) => detect::run_detect(args).await,
        Commands::Allergens(command) => allergens::run(command).await,
    }
}
