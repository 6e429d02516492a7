// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OCR capability contract and the word-level geometry it produces

use image::RgbImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by an OCR engine
#[derive(Debug, Error)]
pub enum OcrError {
    /// The engine could not be started or exited abnormally
    #[error("OCR engine failed: {0}")]
    Engine(String),

    /// The engine answered, but its output could not be interpreted
    #[error("Malformed OCR output at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// Staging the image for the engine failed
    #[error("OCR I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bounding box for a recognized word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// A single OCR-recognized word
///
/// `text` is the engine's raw output for this word, never spell-corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrWordBox {
    pub text: String,
    #[serde(flatten)]
    pub bounding_box: BoundingBox,
    /// Engine confidence, 0-100 (Tesseract reports -1 for non-word rows)
    pub confidence: i32,
}

impl OcrWordBox {
    pub fn new(
        text: impl Into<String>,
        left: u32,
        top: u32,
        width: u32,
        height: u32,
        confidence: i32,
    ) -> Self {
        Self {
            text: text.into(),
            bounding_box: BoundingBox {
                left,
                top,
                width,
                height,
            },
            confidence,
        }
    }
}

/// OCR engine capability used by the detection pipeline
///
/// Both calls run over the same image and are expected, but not guaranteed,
/// to agree on content. Implementations block until the engine answers.
pub trait OcrOracle: Send + Sync {
    /// Full recognized text of the image
    fn extract_text(&self, image: &RgbImage) -> Result<String, OcrError>;

    /// Per-word boxes in engine scan order
    fn extract_word_boxes(&self, image: &RgbImage) -> Result<Vec<OcrWordBox>, OcrError>;

    /// Engine name for logging
    fn name(&self) -> &'static str;
}
