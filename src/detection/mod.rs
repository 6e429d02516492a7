// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Allergen detection pipeline
//!
//! Components:
//! - `normalizer` - OCR noise cleanup and dictionary-gated spelling correction
//! - `matcher` - Substring matching against the allergen snapshot
//! - `highlighter` - Markers over word boxes whose raw text contains a match
//! - `pipeline` - Orchestrates the above over one image

pub mod errors;
pub mod highlighter;
pub mod matcher;
pub mod normalizer;
pub mod pipeline;

pub use errors::DetectionError;
pub use highlighter::{highlight, HighlightedWord, DEFAULT_CONFIDENCE_THRESHOLD};
pub use matcher::match_allergens;
pub use normalizer::normalize;
pub use pipeline::{AllergenDetector, DetectionResult};
