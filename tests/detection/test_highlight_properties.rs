// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use allergen_scanner::detection::highlighter::{highlight, MARKER_COLOR};
use allergen_scanner::vision::ocr::OcrWordBox;
use image::{Rgb, RgbImage};
use std::collections::BTreeSet;

fn canvas() -> RgbImage {
    RgbImage::from_pixel(300, 120, Rgb([240, 240, 240]))
}

fn found(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_threshold_is_exclusive() {
    for (confidence, expected) in [(39, 0), (40, 0), (41, 1), (100, 1)] {
        let mut image = canvas();
        let boxes = vec![OcrWordBox::new("milk", 10, 10, 40, 20, confidence)];
        let drawn = highlight(&mut image, &boxes, &found(&["milk"]), 40);
        assert_eq!(drawn.len(), expected, "confidence {}", confidence);
    }
}

#[test]
fn test_non_word_rows_never_drawn() {
    let mut image = canvas();
    let boxes = vec![OcrWordBox::new("", 0, 0, 300, 120, -1)];
    let drawn = highlight(&mut image, &boxes, &found(&["milk"]), 40);
    assert!(drawn.is_empty());
    assert_eq!(image, canvas());
}

#[test]
fn test_no_found_allergens_leaves_image_untouched() {
    let mut image = canvas();
    let boxes = vec![OcrWordBox::new("peanut", 10, 10, 60, 20, 99)];
    let drawn = highlight(&mut image, &boxes, &BTreeSet::new(), 40);
    assert!(drawn.is_empty());
    assert_eq!(image, canvas());
}

#[test]
fn test_every_marker_is_red_on_the_box_outline() {
    let mut image = canvas();
    let boxes = vec![
        OcrWordBox::new("wheat", 10, 10, 50, 20, 80),
        OcrWordBox::new("Eggs", 100, 50, 40, 25, 70),
    ];
    let drawn = highlight(&mut image, &boxes, &found(&["egg", "wheat"]), 40);
    assert_eq!(drawn.len(), 2);

    for marker in &drawn {
        let b = marker.bounding_box;
        assert_eq!(*image.get_pixel(b.left, b.top), MARKER_COLOR);
        assert_eq!(*image.get_pixel(b.left + b.width, b.top + b.height), MARKER_COLOR);
    }
}
