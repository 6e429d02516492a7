// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Scanner configuration loaded from environment variables

use std::env;
use std::path::PathBuf;

use crate::detection::DEFAULT_CONFIDENCE_THRESHOLD;
use crate::vision::DEFAULT_MAX_IMAGE_SIZE;

/// Runtime configuration for the scanner service and CLI
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Address the HTTP API binds to
    pub api_host: String,
    /// Port the HTTP API listens on
    pub api_port: u16,
    /// Tesseract executable
    pub tesseract_bin: String,
    /// Tesseract language pack (English only)
    pub ocr_language: String,
    /// Newline-delimited list of valid words
    pub dictionary_path: PathBuf,
    /// Plain-text corpus used to train the spelling corrector
    pub correction_corpus_path: PathBuf,
    /// JSON allergen list
    pub allergen_file: PathBuf,
    /// Minimum OCR confidence (exclusive) for highlighting
    pub confidence_threshold: i32,
    /// Upper bound on a whole detection request, in milliseconds
    pub detect_timeout_ms: u64,
    /// Upper bound on encoded image size, in bytes
    pub max_image_size: usize,
}

impl ScannerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_host: env::var("API_HOST").unwrap_or(defaults.api_host),
            api_port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.api_port),
            tesseract_bin: env::var("TESSERACT_BIN").unwrap_or(defaults.tesseract_bin),
            ocr_language: env::var("OCR_LANGUAGE").unwrap_or(defaults.ocr_language),
            dictionary_path: env::var("DICTIONARY_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.dictionary_path),
            correction_corpus_path: env::var("CORRECTION_CORPUS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.correction_corpus_path),
            allergen_file: env::var("ALLERGEN_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.allergen_file),
            confidence_threshold: env::var("CONFIDENCE_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.confidence_threshold),
            detect_timeout_ms: env::var("DETECT_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.detect_timeout_ms),
            max_image_size: env::var("MAX_IMAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_image_size),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.ocr_language != "eng" {
            return Err(format!(
                "Only English OCR is supported, got '{}'",
                self.ocr_language
            ));
        }
        if !(0..=100).contains(&self.confidence_threshold) {
            return Err(format!(
                "Confidence threshold must be between 0 and 100, got {}",
                self.confidence_threshold
            ));
        }
        if self.detect_timeout_ms == 0 {
            return Err("Detect timeout must be greater than 0".to_string());
        }
        if self.max_image_size == 0 {
            return Err("Max image size must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            api_host: "127.0.0.1".to_string(),
            api_port: 8080,
            tesseract_bin: "tesseract".to_string(),
            ocr_language: "eng".to_string(),
            dictionary_path: PathBuf::from("./data/words.txt"),
            correction_corpus_path: PathBuf::from("./data/corpus.txt"),
            allergen_file: PathBuf::from("./data/allergens.json"),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            detect_timeout_ms: 30_000,
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
        }
    }
}
