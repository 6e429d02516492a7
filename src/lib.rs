// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod allergens;
pub mod api;
pub mod cli;
pub mod config;
pub mod detection;
pub mod lexicon;
pub mod version;
pub mod vision;

pub use allergens::{AllergenRegistry, AllergenSet, JsonAllergenStore};
pub use config::ScannerConfig;
pub use detection::{AllergenDetector, DetectionError, DetectionResult};
pub use vision::ocr::{OcrOracle, OcrWordBox, TesseractOcr};
