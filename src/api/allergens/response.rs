// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Current allergen list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergenListResponse {
    pub allergens: Vec<String>,
    pub count: usize,
}

impl AllergenListResponse {
    pub fn new(allergens: Vec<String>) -> Self {
        Self {
            count: allergens.len(),
            allergens,
        }
    }
}

/// Result of adding or removing one allergen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergenChangeResponse {
    pub allergen: String,
    pub message: String,
}
