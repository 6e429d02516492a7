// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Word-validity and spell-correction oracles used by text normalization

pub mod corrector;
pub mod dictionary;

use thiserror::Error;

pub use corrector::FrequencyCorrector;
pub use dictionary::{GlobalDictionary, WordListDictionary};

/// Errors reported by lexicon oracles
///
/// Callers treat these as non-fatal: the affected word passes through
/// unmodified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[error("{oracle} unavailable: {reason}")]
    Unavailable { oracle: &'static str, reason: String },
}

/// Case-sensitive membership test against a fixed word corpus
pub trait DictionaryOracle: Send + Sync {
    fn is_valid_word(&self, word: &str) -> Result<bool, OracleError>;
}

/// Best-effort single-word spelling correction
pub trait CorrectionOracle: Send + Sync {
    fn correct(&self, word: &str) -> Result<String, OracleError>;
}
