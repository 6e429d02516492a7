// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tesseract command-line adapter
//!
//! Each call stages the image as a temporary PNG and runs the `tesseract`
//! binary against it. Full text comes from the plain-text renderer, word
//! boxes from the TSV renderer.

use std::path::Path;
use std::process::Command;

use image::{ImageFormat, RgbImage};
use tempfile::NamedTempFile;
use tracing::debug;

use super::model::{OcrError, OcrOracle, OcrWordBox};

/// TSV level for individual words
const WORD_LEVEL: u32 = 5;

/// Number of columns in a Tesseract TSV row
const TSV_COLUMNS: usize = 12;

/// OCR oracle backed by the Tesseract CLI
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    binary: String,
    language: String,
}

impl TesseractOcr {
    pub fn new(binary: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
        }
    }

    fn stage(&self, image: &RgbImage) -> Result<NamedTempFile, OcrError> {
        let file = tempfile::Builder::new()
            .prefix("label-")
            .suffix(".png")
            .tempfile()?;
        image
            .save_with_format(file.path(), ImageFormat::Png)
            .map_err(|e| OcrError::Engine(format!("failed to stage image: {}", e)))?;
        Ok(file)
    }

    fn run(&self, path: &Path, renderer: Option<&str>) -> Result<String, OcrError> {
        let mut command = Command::new(&self.binary);
        command
            .arg(path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language);
        if let Some(renderer) = renderer {
            command.arg(renderer);
        }

        let output = command.output().map_err(|e| {
            OcrError::Engine(format!("failed to run {} (is it installed?): {}", self.binary, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Engine(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new("tesseract", "eng")
    }
}

impl OcrOracle for TesseractOcr {
    fn extract_text(&self, image: &RgbImage) -> Result<String, OcrError> {
        let staged = self.stage(image)?;
        let text = self.run(staged.path(), None)?;
        debug!("tesseract text pass: {} chars", text.len());
        Ok(text)
    }

    fn extract_word_boxes(&self, image: &RgbImage) -> Result<Vec<OcrWordBox>, OcrError> {
        let staged = self.stage(image)?;
        let tsv = self.run(staged.path(), Some("tsv"))?;
        let words = parse_tsv(&tsv)?;
        debug!("tesseract box pass: {} words", words.len());
        Ok(words)
    }

    fn name(&self) -> &'static str {
        "tesseract"
    }
}

/// Parse Tesseract TSV output into word boxes, preserving row order
pub fn parse_tsv(tsv: &str) -> Result<Vec<OcrWordBox>, OcrError> {
    let mut words = Vec::new();

    for (idx, line) in tsv.lines().enumerate() {
        let line_no = idx + 1;
        if idx == 0 || line.trim().is_empty() {
            continue;
        }

        let cols: Vec<&str> = line.splitn(TSV_COLUMNS, '\t').collect();
        if cols.len() < TSV_COLUMNS - 1 {
            return Err(OcrError::Malformed {
                line: line_no,
                reason: format!("expected {} columns, got {}", TSV_COLUMNS, cols.len()),
            });
        }

        let level = parse_column::<u32>(cols[0], "level", line_no)?;
        if level != WORD_LEVEL {
            continue;
        }

        let left = parse_column::<u32>(cols[6], "left", line_no)?;
        let top = parse_column::<u32>(cols[7], "top", line_no)?;
        let width = parse_column::<u32>(cols[8], "width", line_no)?;
        let height = parse_column::<u32>(cols[9], "height", line_no)?;
        // Tesseract 4+ reports fractional confidences
        let confidence = parse_column::<f32>(cols[10], "conf", line_no)?.round() as i32;
        let text = cols.get(11).copied().unwrap_or_default();

        words.push(OcrWordBox::new(text, left, top, width, height, confidence));
    }

    Ok(words)
}

fn parse_column<T: std::str::FromStr>(
    raw: &str,
    column: &str,
    line: usize,
) -> Result<T, OcrError> {
    raw.trim().parse::<T>().map_err(|_| OcrError::Malformed {
        line,
        reason: format!("invalid {} value '{}'", column, raw),
    })
}
