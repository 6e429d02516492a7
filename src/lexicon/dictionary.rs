// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Word-list dictionary and its process-wide instance
//!
//! The corpus is loaded once at startup through [`init_global`] and then
//! shared read-only by every request.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing::info;

use super::{DictionaryOracle, OracleError};

static GLOBAL_DICTIONARY: OnceLock<WordListDictionary> = OnceLock::new();

/// Fixed set of valid words, compared case-sensitively
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Build from any iterator of words; blank entries are skipped
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a newline-delimited word list
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dictionary {}", path.display()))?;
        Ok(Self::from_words(contents.lines()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryOracle for WordListDictionary {
    fn is_valid_word(&self, word: &str) -> Result<bool, OracleError> {
        Ok(self.contains(word))
    }
}

/// Load the word list into the process-wide dictionary
///
/// Only the first call loads anything; later calls return the instance that
/// is already installed.
pub fn init_global(path: impl AsRef<Path>) -> Result<&'static WordListDictionary> {
    if let Some(existing) = GLOBAL_DICTIONARY.get() {
        return Ok(existing);
    }

    let dictionary = WordListDictionary::load(&path)?;
    info!(
        "Dictionary loaded: {} words from {}",
        dictionary.len(),
        path.as_ref().display()
    );
    Ok(GLOBAL_DICTIONARY.get_or_init(|| dictionary))
}

/// Install an already-built dictionary as the process-wide instance
pub fn install_global(dictionary: WordListDictionary) -> &'static WordListDictionary {
    GLOBAL_DICTIONARY.get_or_init(|| dictionary)
}

/// The process-wide dictionary, if initialized
pub fn global() -> Option<&'static WordListDictionary> {
    GLOBAL_DICTIONARY.get()
}

/// Oracle view over the process-wide dictionary
///
/// Reports `Unavailable` until the dictionary has been initialized.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalDictionary;

impl DictionaryOracle for GlobalDictionary {
    fn is_valid_word(&self, word: &str) -> Result<bool, OracleError> {
        global()
            .map(|dictionary| dictionary.contains(word))
            .ok_or_else(|| OracleError::Unavailable {
                oracle: "dictionary",
                reason: "dictionary has not been initialized".to_string(),
            })
    }
}
