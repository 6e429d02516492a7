// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OCR text cleanup and dictionary-gated spelling correction

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::lexicon::{CorrectionOracle, DictionaryOracle};

/// Noise left behind by OCR: `+`, `@`, `_` and the bytes of a mis-decoded em-dash
const NOISE_CHARS: &[char] = &['+', '@', 'â', '€', '”', '_'];

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

fn punctuation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.,]+").expect("static regex"))
}

/// Strip noise characters and collapse whitespace and `.`/`,` runs
pub fn clean(raw_text: &str) -> String {
    let stripped: String = raw_text.chars().filter(|c| !NOISE_CHARS.contains(c)).collect();
    let spaced = whitespace_re().replace_all(&stripped, " ");
    let dotted = punctuation_re().replace_all(&spaced, ".");
    dotted.trim().to_string()
}

/// Correct one word, keeping the original unless the correction is a real word
///
/// A rejected correction is discarded in favour of the raw word, so brand
/// and technical terms are never swapped for a plausible dictionary word.
/// Oracle failures leave the word untouched.
pub fn correct_word(
    word: &str,
    dictionary: &dyn DictionaryOracle,
    corrector: &dyn CorrectionOracle,
) -> String {
    let candidate = match corrector.correct(word) {
        Ok(candidate) => candidate,
        Err(e) => {
            debug!("Keeping '{}': {}", word, e);
            return word.to_string();
        }
    };

    match dictionary.is_valid_word(&candidate.to_lowercase()) {
        Ok(true) => candidate,
        Ok(false) => word.to_string(),
        Err(e) => {
            debug!("Keeping '{}': {}", word, e);
            word.to_string()
        }
    }
}

/// Normalize raw OCR text into a single cleaned, corrected line
pub fn normalize(
    raw_text: &str,
    dictionary: &dyn DictionaryOracle,
    corrector: &dyn CorrectionOracle,
) -> String {
    clean(raw_text)
        .split_whitespace()
        .map(|word| correct_word(word, dictionary, corrector))
        .collect::<Vec<_>>()
        .join(" ")
}
