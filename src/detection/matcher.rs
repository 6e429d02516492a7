// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Substring matching of allergens against normalized label text
//!
//! Matching is plain substring search over the whole line, not per token.
//! Because words are joined with single spaces, an allergen containing a
//! space can match across two unrelated neighbouring words.

use std::collections::BTreeSet;

use crate::allergens::AllergenSet;

/// Allergens occurring anywhere in `normalized_text`
pub fn match_allergens(normalized_text: &str, allergens: &AllergenSet) -> BTreeSet<String> {
    let text = normalized_text.to_lowercase();
    allergens
        .iter()
        .filter(|allergen| text.contains(allergen))
        .map(str::to_string)
        .collect()
}
