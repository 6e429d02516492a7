// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! JSON file-backed allergen list
//!
//! The list is read once when the store is opened and kept in memory behind
//! a lock; every mutation rewrites the file. All routes share one store, so
//! there is a single source of truth for the current list.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{normalize_name, AllergenRegistry, AllergenSet, RegistryError};

/// On-disk layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct AllergenFile {
    #[serde(default)]
    allergens: Vec<String>,
}

/// Result of adding an allergen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(String),
    AlreadyExists(String),
}

impl AddOutcome {
    pub fn name(&self) -> &str {
        match self {
            AddOutcome::Added(name) | AddOutcome::AlreadyExists(name) => name,
        }
    }
}

/// Flat allergen list persisted as `{"allergens": [...]}`
pub struct JsonAllergenStore {
    path: PathBuf,
    // Insertion order, as written to disk
    names: RwLock<Vec<String>>,
}

impl JsonAllergenStore {
    /// Open the store, starting empty if the file does not exist yet
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, RegistryError> {
        let path = path.into();

        let names = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => parse(&path, &contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Allergen file {} not found, starting empty", path.display());
                Vec::new()
            }
            Err(source) => {
                return Err(RegistryError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        info!("Allergen store opened: {} entries from {}", names.len(), path.display());
        Ok(Self {
            path,
            names: RwLock::new(names),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current snapshot
    pub async fn list(&self) -> AllergenSet {
        self.names.read().await.iter().collect()
    }

    /// Entries in the order they were added
    pub async fn names(&self) -> Vec<String> {
        self.names.read().await.clone()
    }

    /// Add an allergen; names are trimmed and lowercased first
    pub async fn add(&self, name: &str) -> Result<AddOutcome, RegistryError> {
        let name = normalize_name(name).ok_or(RegistryError::EmptyName)?;

        let mut names = self.names.write().await;
        if names.contains(&name) {
            return Ok(AddOutcome::AlreadyExists(name));
        }

        names.push(name.clone());
        self.persist(&names).await?;
        info!("Allergen added: {}", name);
        Ok(AddOutcome::Added(name))
    }

    /// Remove the first entry equal to the lowercased name
    ///
    /// Returns whether anything was removed.
    pub async fn remove(&self, name: &str) -> Result<bool, RegistryError> {
        let name = normalize_name(name).ok_or(RegistryError::EmptyName)?;

        let mut names = self.names.write().await;
        let Some(position) = names.iter().position(|existing| *existing == name) else {
            return Ok(false);
        };

        names.remove(position);
        self.persist(&names).await?;
        info!("Allergen removed: {}", name);
        Ok(true)
    }

    async fn persist(&self, names: &[String]) -> Result<(), RegistryError> {
        let io_err = |source| RegistryError::Io {
            path: self.path.display().to_string(),
            source,
        };

        let file = AllergenFile {
            allergens: names.to_vec(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(|e| RegistryError::Corrupt {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;
        Ok(())
    }
}

fn parse(path: &Path, contents: &str) -> Result<Vec<String>, RegistryError> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let file: AllergenFile = serde_json::from_str(contents).map_err(|e| RegistryError::Corrupt {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut names: Vec<String> = Vec::with_capacity(file.allergens.len());
    for name in file.allergens.iter().filter_map(|n| normalize_name(n)) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    Ok(names)
}

#[async_trait]
impl AllergenRegistry for JsonAllergenStore {
    async fn list_allergens(&self) -> Result<AllergenSet, RegistryError> {
        Ok(self.list().await)
    }
}
