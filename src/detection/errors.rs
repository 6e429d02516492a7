// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Errors that abort a detection request

use thiserror::Error;

use crate::vision::ocr::OcrError;
use crate::vision::ImageError;

/// Fatal detection failures; no partial result is produced
///
/// Dictionary and corrector outages are not listed here: the normalizer
/// absorbs them per word.
#[derive(Debug, Error)]
pub enum DetectionError {
    /// The supplied bytes are not a supported raster image
    #[error("Image decode failed: {0}")]
    ImageDecode(#[from] ImageError),

    /// Either OCR pass failed or returned malformed data
    #[error("OCR engine failed: {0}")]
    OcrEngine(#[from] OcrError),
}

impl DetectionError {
    /// Short machine-readable kind, used in API error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            DetectionError::ImageDecode(_) => "image_decode_failure",
            DetectionError::OcrEngine(_) => "ocr_engine_failure",
        }
    }
}
