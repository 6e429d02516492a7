// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Production detector wiring against the files in data/

use allergen_scanner::allergens::JsonAllergenStore;
use allergen_scanner::config::ScannerConfig;
use allergen_scanner::detection::AllergenDetector;
use allergen_scanner::lexicon::dictionary::global;
use allergen_scanner::vision::ocr::{OcrError, OcrOracle, OcrWordBox};
use allergen_scanner::AllergenSet;
use image::{Rgb, RgbImage};
use std::path::PathBuf;
use std::sync::Arc;

/// Reads back a fixed line of label text with no word boxes
struct LabelText(String);

impl OcrOracle for LabelText {
    fn extract_text(&self, _image: &RgbImage) -> Result<String, OcrError> {
        Ok(self.0.clone())
    }

    fn extract_word_boxes(&self, _image: &RgbImage) -> Result<Vec<OcrWordBox>, OcrError> {
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "label-text"
    }
}

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn shipped_config() -> ScannerConfig {
    ScannerConfig {
        dictionary_path: data_file("words.txt"),
        correction_corpus_path: data_file("corpus.txt"),
        allergen_file: data_file("allergens.json"),
        ..Default::default()
    }
}

async fn shipped_allergens() -> AllergenSet {
    JsonAllergenStore::open(data_file("allergens.json"))
        .await
        .unwrap()
        .list()
        .await
}

fn scan(text: &str, allergens: &AllergenSet) -> (String, Vec<String>) {
    let ocr = Arc::new(LabelText(text.to_string()));
    let detector = AllergenDetector::from_config_with_ocr(&shipped_config(), ocr).unwrap();
    let label = RgbImage::from_pixel(64, 32, Rgb([255, 255, 255]));

    let result = detector.detect(label, allergens).unwrap();
    (
        result.normalized_text,
        result.found_allergens.into_iter().collect(),
    )
}

#[tokio::test]
async fn test_shipped_dictionary_is_a_real_word_list() {
    let allergens = shipped_allergens().await;
    assert!(allergens.len() >= 14);

    let _ = scan("", &allergens);
    let dictionary = global().unwrap();
    assert!(dictionary.len() > 50_000);
    for word in ["tomato", "soup", "figs", "silk", "tofu", "milk", "peanuts"] {
        assert!(dictionary.contains(word), "missing {}", word);
    }
}

#[tokio::test]
async fn test_common_ingredients_are_not_turned_into_allergens() {
    let allergens = shipped_allergens().await;
    let labels = [
        "tomato soup",
        "dried figs",
        "silk tofu",
        "Ingredients: tomato soup, dried figs, silk tofu.",
        "Pure cane sugar, sea salt, corn syrup, vinegar, onion powder, garlic.",
        "Cocoa, vanilla, baking soda, natural flavors, spices, paprika.",
        "Brown rice, quinoa, kale, coconut cream, lime, ginger.",
        "Rolled oats, raisins, cinnamon, apple juice concentrate, citric acid.",
        "sunflower oil rice flour potato starch",
        "beef stock carrots thyme",
        "yeast extract black pepper",
    ];

    for label in labels {
        let (normalized, found) = scan(label, &allergens);
        assert!(
            found.is_empty(),
            "{:?} normalized to {:?} and matched {:?}",
            label,
            normalized,
            found
        );
    }
}

#[tokio::test]
async fn test_plain_words_pass_through_unchanged() {
    let allergens = shipped_allergens().await;

    let (normalized, _) = scan("tomato soup dried figs silk tofu", &allergens);
    assert_eq!(normalized, "tomato soup dried figs silk tofu");
}

#[tokio::test]
async fn test_misread_allergens_are_still_corrected() {
    let allergens = shipped_allergens().await;

    let (normalized, found) = scan("contains m1lk and peanuls", &allergens);
    assert_eq!(normalized, "contains milk and peanuts");
    assert_eq!(found, vec!["milk".to_string(), "peanut".to_string()]);

    let (_, found) = scan("toasted sesme seeds", &allergens);
    assert_eq!(found, vec!["sesame".to_string()]);
}

#[tokio::test]
async fn test_gluten_free_label_has_no_wheat() {
    let wheat: AllergenSet = ["wheat"].into_iter().collect();

    let (normalized, found) = scan("gluten free", &wheat);
    assert_eq!(normalized, "gluten free");
    assert!(found.is_empty());
}
