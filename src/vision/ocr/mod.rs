// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OCR integration for label text extraction
//!
//! Components:
//! - `model` - The `OcrOracle` capability and word box types
//! - `tesseract` - Tesseract CLI implementation (English only)

pub mod model;
pub mod tesseract;

pub use model::{BoundingBox, OcrError, OcrOracle, OcrWordBox};
pub use tesseract::{parse_tsv, TesseractOcr};
