// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detection pipeline: OCR -> normalize -> match -> highlight

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use image::RgbImage;
use tracing::{debug, info, warn};

use super::errors::DetectionError;
use super::highlighter::{highlight, HighlightedWord, DEFAULT_CONFIDENCE_THRESHOLD};
use super::matcher::match_allergens;
use super::normalizer::normalize;
use crate::allergens::AllergenSet;
use crate::config::ScannerConfig;
use crate::lexicon::{
    dictionary, CorrectionOracle, DictionaryOracle, FrequencyCorrector, GlobalDictionary,
};
use crate::vision::ocr::{OcrOracle, TesseractOcr};
use crate::vision::{decode_image_bytes, DEFAULT_MAX_IMAGE_SIZE};

/// Outcome of one detection
#[derive(Debug, Clone)]
pub struct DetectionResult {
    /// Allergens found in the normalized text
    pub found_allergens: BTreeSet<String>,
    /// Cleaned, corrected OCR text
    pub normalized_text: String,
    /// Input image with markers drawn over matching words
    pub annotated_image: RgbImage,
    /// Markers drawn, one per (word box, allergen) pair
    pub highlighted: Vec<HighlightedWord>,
    /// Wall-clock time spent in the pipeline
    pub processing_time_ms: u64,
}

impl DetectionResult {
    pub fn markers_drawn(&self) -> usize {
        self.highlighted.len()
    }
}

/// Runs the allergen detection pipeline over single images
///
/// Holds no per-request state; the same detector serves concurrent requests,
/// each with its own image and allergen snapshot.
#[derive(Clone)]
pub struct AllergenDetector {
    ocr: Arc<dyn OcrOracle>,
    dictionary: Arc<dyn DictionaryOracle>,
    corrector: Arc<dyn CorrectionOracle>,
    confidence_threshold: i32,
    max_image_size: usize,
}

impl AllergenDetector {
    pub fn new(
        ocr: Arc<dyn OcrOracle>,
        dictionary: Arc<dyn DictionaryOracle>,
        corrector: Arc<dyn CorrectionOracle>,
    ) -> Self {
        Self {
            ocr,
            dictionary,
            corrector,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
        }
    }

    /// Build the production detector: Tesseract OCR, the process-wide
    /// dictionary and a corpus-trained corrector
    ///
    /// A missing dictionary or corpus is logged and tolerated; the affected
    /// oracle then reports itself unavailable and words pass through as read.
    pub fn from_config(config: &ScannerConfig) -> anyhow::Result<Self> {
        let ocr = TesseractOcr::new(&config.tesseract_bin, &config.ocr_language);
        Self::from_config_with_ocr(config, Arc::new(ocr))
    }

    /// Same as [`from_config`](Self::from_config) with a caller-supplied OCR engine
    pub fn from_config_with_ocr(
        config: &ScannerConfig,
        ocr: Arc<dyn OcrOracle>,
    ) -> anyhow::Result<Self> {
        config.validate().map_err(|e| anyhow::anyhow!(e))?;

        if let Err(e) = dictionary::init_global(&config.dictionary_path) {
            warn!("Dictionary unavailable, spelling corrections disabled: {:#}", e);
        }

        let mut corrector = FrequencyCorrector::load(&config.correction_corpus_path)
            .unwrap_or_else(|e| {
                warn!("Correction corpus unavailable: {:#}", e);
                FrequencyCorrector::default()
            });
        // Valid dictionary words must never be corrected into other words
        if let Some(words) = dictionary::global() {
            corrector = corrector.with_known_words(words.words());
        }

        Ok(Self::new(ocr, Arc::new(GlobalDictionary), Arc::new(corrector))
            .with_confidence_threshold(config.confidence_threshold)
            .with_max_image_size(config.max_image_size))
    }

    pub fn with_confidence_threshold(mut self, threshold: i32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    pub fn with_max_image_size(mut self, max_image_size: usize) -> Self {
        self.max_image_size = max_image_size;
        self
    }

    pub fn confidence_threshold(&self) -> i32 {
        self.confidence_threshold
    }

    pub fn max_image_size(&self) -> usize {
        self.max_image_size
    }

    /// Detect allergens in an already-decoded image
    ///
    /// The image is consumed and returned annotated in the result. Any OCR
    /// failure aborts the whole detection.
    pub fn detect(
        &self,
        mut image: RgbImage,
        allergens: &AllergenSet,
    ) -> Result<DetectionResult, DetectionError> {
        let start = Instant::now();

        let raw_text = self.ocr.extract_text(&image)?.to_lowercase();
        debug!("{} text pass: {} chars", self.ocr.name(), raw_text.len());

        let normalized_text = normalize(&raw_text, self.dictionary.as_ref(), self.corrector.as_ref());
        let found_allergens = match_allergens(&normalized_text, allergens);

        // Second, independent pass; boxes keep their raw OCR text
        let word_boxes = self.ocr.extract_word_boxes(&image)?;
        let highlighted = highlight(
            &mut image,
            &word_boxes,
            &found_allergens,
            self.confidence_threshold,
        );

        let processing_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "Detection complete: {} words, {} boxes, {} allergens found ({} checked), {} markers, {}ms",
            normalized_text.split_whitespace().count(),
            word_boxes.len(),
            found_allergens.len(),
            allergens.len(),
            highlighted.len(),
            processing_time_ms
        );

        Ok(DetectionResult {
            found_allergens,
            normalized_text: normalized_text.trim().to_string(),
            annotated_image: image,
            highlighted,
            processing_time_ms,
        })
    }

    /// Decode an encoded image (PNG, JPEG, ...) and detect allergens in it
    pub fn detect_bytes(
        &self,
        bytes: &[u8],
        allergens: &AllergenSet,
    ) -> Result<DetectionResult, DetectionError> {
        let (image, info) = decode_image_bytes(bytes, self.max_image_size)?;
        debug!(
            "Decoded image: {}x{}, {} bytes",
            info.width, info.height, info.size_bytes
        );
        self.detect(image.to_rgb8(), allergens)
    }
}
