// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Allergen registry: the list of substances to look for on a label

pub mod store;

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use store::{AddOutcome, JsonAllergenStore};

/// Errors raised by allergen registries
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Allergen name is empty")]
    EmptyName,

    #[error("Failed to access allergen store {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Allergen store {path} is corrupt: {reason}")]
    Corrupt { path: String, reason: String },
}

/// Immutable snapshot of lowercase allergen names
///
/// Every entry is trimmed and lowercased on the way in, so comparisons
/// against lowercased label text never need to touch case again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AllergenSet {
    names: BTreeSet<String>,
}

impl AllergenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}

/// Canonical form of an allergen name, `None` when blank
pub fn normalize_name(name: &str) -> Option<String> {
    let name = name.trim().to_lowercase();
    (!name.is_empty()).then_some(name)
}

impl<S: AsRef<str>> FromIterator<S> for AllergenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .filter_map(|name| normalize_name(name.as_ref()))
                .collect(),
        }
    }
}

impl From<Vec<String>> for AllergenSet {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<AllergenSet> for Vec<String> {
    fn from(set: AllergenSet) -> Self {
        set.names.into_iter().collect()
    }
}

/// Source of the current allergen list
///
/// Callers take one snapshot per detection and hand it to the pipeline;
/// the pipeline never goes back to the registry mid-request.
#[async_trait]
pub trait AllergenRegistry: Send + Sync {
    async fn list_allergens(&self) -> Result<AllergenSet, RegistryError>;
}
