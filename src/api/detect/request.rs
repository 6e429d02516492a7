// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detect request types and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Longest accepted `image` string for a decoded size limit
///
/// Base64 inflates by 4/3; the extra room covers a `data:image/...;base64,` prefix.
pub fn max_encoded_image_len(max_image_size: usize) -> usize {
    max_image_size.saturating_mul(4) / 3 + 256
}

/// Request to scan one label image
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectRequest {
    /// Base64 image data, or a `data:image/...;base64,` URL from a camera capture
    #[serde(default)]
    pub image: Option<String>,
}

impl DetectRequest {
    /// Validate the detect request against the configured size limit
    pub fn validate(&self, max_image_size: usize) -> Result<(), ApiError> {
        let image = match self.image.as_deref() {
            Some(image) if !image.trim().is_empty() => image,
            _ => {
                return Err(ApiError::ValidationError {
                    field: "image".to_string(),
                    message: "image is required".to_string(),
                })
            }
        };

        if image.len() > max_encoded_image_len(max_image_size) {
            return Err(ApiError::ValidationError {
                field: "image".to_string(),
                message: format!("image exceeds maximum size of {} bytes", max_image_size),
            });
        }

        Ok(())
    }
}
