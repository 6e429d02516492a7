// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAllergenRequest {
    #[serde(default)]
    pub allergen: Option<String>,
}

impl AddAllergenRequest {
    pub fn validate(&self) -> Result<&str, ApiError> {
        match self.allergen.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(ApiError::ValidationError {
                field: "allergen".to_string(),
                message: "allergen is required".to_string(),
            }),
        }
    }
}
