// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detect response types

use serde::{Deserialize, Serialize};

use crate::detection::HighlightedWord;

/// Response from a label scan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    /// Allergens found, sorted
    pub found_allergens: Vec<String>,
    /// Cleaned and corrected label text
    pub normalized_text: String,
    /// Annotated image as base64 PNG
    pub annotated_image: String,
    /// Markers drawn on the annotated image
    pub highlighted: Vec<HighlightedWord>,
    /// Number of allergens the label was checked against
    pub allergens_checked: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
