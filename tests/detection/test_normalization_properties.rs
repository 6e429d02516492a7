// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use allergen_scanner::detection::normalize;
use allergen_scanner::detection::normalizer::clean;
use allergen_scanner::lexicon::WordListDictionary;

use super::fakes::TableCorrector;

const SAMPLES: &[&str] = &[
    "Ingredients: Wheat Flour,, Sugar..  Soy_Lecithin",
    "may contain  traces of @peanuts+ and tree nuts\n\n",
    "   ",
    "MILK\tSOLIDS , , EGG",
    "wheatâ€”gluten",
];

#[test]
fn test_output_has_no_noise_or_runs() {
    let dictionary = WordListDictionary::default();
    let corrector = TableCorrector::new(&[]);

    for sample in SAMPLES {
        let out = normalize(sample, &dictionary, &corrector);
        for noise in ['+', '@', '_', 'â', '€'] {
            assert!(!out.contains(noise), "{:?} left noise in {:?}", sample, out);
        }
        assert!(!out.contains("  "), "double space in {:?}", out);
        assert!(!out.contains(".."), "dot run in {:?}", out);
        assert!(!out.contains(','), "comma in {:?}", out);
        assert_eq!(out, out.trim());
    }
}

#[test]
fn test_normalize_twice_changes_nothing() {
    let dictionary = WordListDictionary::from_words(["flour", "sugar", "peanuts"]);
    let corrector = TableCorrector::new(&[("fl0ur", "flour"), ("peanuls", "peanuts")]);

    for sample in SAMPLES {
        let once = normalize(sample, &dictionary, &corrector);
        let twice = normalize(&once, &dictionary, &corrector);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_dictionary_gate_keeps_unknown_words() {
    let dictionary = WordListDictionary::from_words(["milk"]);
    let corrector = TableCorrector::new(&[("maltodextrin", "malt dextrin")]);

    assert_eq!(
        normalize("maltodextrin milk", &dictionary, &corrector),
        "maltodextrin milk"
    );
}

#[test]
fn test_clean_only_touches_noise() {
    assert_eq!(clean("egg+yolk"), "eggyolk");
    assert_eq!(clean("a , b"), "a . b");
}
