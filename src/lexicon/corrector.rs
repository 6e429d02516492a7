// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Frequency-based spelling corrector
//!
//! Candidates are generated by single-character edits (deletes, transposes,
//! replaces, inserts). A known word is returned unchanged; otherwise the most
//! frequent known candidate at distance 1 wins, then distance 2. Equal counts
//! resolve to the lexicographically smallest word.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::info;

use super::{CorrectionOracle, OracleError};

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Spelling corrector trained on word frequencies from a text corpus
#[derive(Debug, Clone, Default)]
pub struct FrequencyCorrector {
    counts: HashMap<String, u64>,
}

impl FrequencyCorrector {
    /// Train on raw corpus text; words are runs of ASCII letters, lowercased
    pub fn from_corpus(text: &str) -> Self {
        let word_re = Regex::new(r"[a-z]+").expect("static regex");
        let lowered = text.to_lowercase();

        let mut counts = HashMap::new();
        for m in word_re.find_iter(&lowered) {
            *counts.entry(m.as_str().to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Load and train on a corpus file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read correction corpus {}", path.display()))?;
        let corrector = Self::from_corpus(&text);
        info!(
            "Correction corpus loaded: {} distinct words from {}",
            corrector.vocabulary_size(),
            path.display()
        );
        Ok(corrector)
    }

    /// Mark every word of a dictionary as known
    ///
    /// Words missing from the corpus get a count of one, so a valid word is
    /// never rewritten into a more frequent neighbour.
    pub fn with_known_words<'a, I>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for word in words {
            let word = word.to_lowercase();
            if !word.is_empty() {
                self.counts.entry(word).or_insert(1);
            }
        }
        self
    }

    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }

    pub fn frequency(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    fn best_of<'a, I>(&self, candidates: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut best: Option<(&String, u64)> = None;
        for candidate in candidates {
            let count = self.frequency(candidate);
            if count == 0 {
                continue;
            }
            best = match best {
                Some((word, best_count))
                    if best_count > count || (best_count == count && word <= candidate) =>
                {
                    Some((word, best_count))
                }
                _ => Some((candidate, count)),
            };
        }
        best.map(|(word, _)| word.clone())
    }

    fn correct_token(&self, token: &str) -> String {
        if self.counts.contains_key(token) {
            return token.to_string();
        }

        let first = edits1(token);
        if let Some(best) = self.best_of(first.iter()) {
            return best;
        }

        self.known_at_distance_two(&first)
            .unwrap_or_else(|| token.to_string())
    }

    fn known_at_distance_two(&self, first: &HashSet<String>) -> Option<String> {
        let mut known = HashSet::new();
        for edit in first {
            for second in edits1(edit) {
                if self.counts.contains_key(&second) {
                    known.insert(second);
                }
            }
        }
        self.best_of(known.iter())
    }
}

impl CorrectionOracle for FrequencyCorrector {
    /// Correct each run of word characters, leaving punctuation in place
    fn correct(&self, word: &str) -> Result<String, OracleError> {
        if self.counts.is_empty() {
            return Err(OracleError::Unavailable {
                oracle: "corrector",
                reason: "correction corpus is empty".to_string(),
            });
        }

        let mut corrected = String::with_capacity(word.len());
        let mut run = String::new();
        for c in word.chars() {
            if is_word_char(c) {
                run.push(c);
                continue;
            }
            if !run.is_empty() {
                corrected.push_str(&self.correct_token(&run));
                run.clear();
            }
            corrected.push(c);
        }
        if !run.is_empty() {
            corrected.push_str(&self.correct_token(&run));
        }

        Ok(corrected)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// All strings one edit away from `word`
fn edits1(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut edits = HashSet::with_capacity(54 * n + 25);

    let join = |left: &[char], middle: &[char], right: &[char]| -> String {
        left.iter().chain(middle).chain(right).collect()
    };

    for i in 0..=n {
        let (left, right) = chars.split_at(i);

        if !right.is_empty() {
            edits.insert(join(left, &[], &right[1..]));
        }
        if right.len() > 1 {
            edits.insert(join(left, &[right[1], right[0]], &right[2..]));
        }
        for c in ALPHABET.chars() {
            if !right.is_empty() {
                edits.insert(join(left, &[c], &right[1..]));
            }
            edits.insert(join(left, &[c], right));
        }
    }

    edits
}
