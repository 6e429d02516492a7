// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{bail, Result};
use clap::Subcommand;
use std::path::PathBuf;

use crate::allergens::{AddOutcome, JsonAllergenStore};
use crate::config::ScannerConfig;

#[derive(Subcommand, Debug)]
pub enum AllergenCommand {
    /// List allergens
    List {
        #[arg(long, env = "ALLERGEN_FILE")]
        allergen_file: Option<PathBuf>,
    },

    /// Add an allergen
    Add {
        name: String,
        #[arg(long, env = "ALLERGEN_FILE")]
        allergen_file: Option<PathBuf>,
    },

    /// Remove an allergen
    Remove {
        name: String,
        #[arg(long, env = "ALLERGEN_FILE")]
        allergen_file: Option<PathBuf>,
    },
}

fn resolve(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| ScannerConfig::from_env().allergen_file)
}

pub async fn run(command: AllergenCommand) -> Result<()> {
    match command {
        AllergenCommand::List { allergen_file } => {
            let store = JsonAllergenStore::open(resolve(allergen_file)).await?;
            let names = store.names().await;
            if names.is_empty() {
                println!("No allergens configured");
            }
            for name in names {
                println!("{}", name);
            }
        }
        AllergenCommand::Add {
            name,
            allergen_file,
        } => {
            let store = JsonAllergenStore::open(resolve(allergen_file)).await?;
            match store.add(&name).await? {
                AddOutcome::Added(name) => println!("✅ Allergen '{}' added", name),
                AddOutcome::AlreadyExists(name) => bail!("Allergen '{}' already exists", name),
            }
        }
        AllergenCommand::Remove {
            name,
            allergen_file,
        } => {
            let store = JsonAllergenStore::open(resolve(allergen_file)).await?;
            if !store.remove(&name).await? {
                bail!("Allergen '{}' not found", name.trim().to_lowercase());
            }
            println!("✅ Allergen '{}' removed", name.trim().to_lowercase());
        }
    }
    Ok(())
}
