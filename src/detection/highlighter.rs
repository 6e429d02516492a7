// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Draws markers over OCR word boxes that contain a detected allergen
//!
//! Word boxes are checked against their raw OCR text, not the corrected
//! text used for matching. A word that only matched after spelling
//! correction (e.g. `m1lk` -> `milk`) is therefore never boxed.

use std::collections::BTreeSet;

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use serde::{Deserialize, Serialize};

use crate::vision::ocr::{BoundingBox, OcrWordBox};

/// Minimum OCR confidence (exclusive) for a word to be highlighted
pub const DEFAULT_CONFIDENCE_THRESHOLD: i32 = 40;

/// Marker colour
pub const MARKER_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Marker line width in pixels
pub const MARKER_THICKNESS: u32 = 2;

/// One marker drawn on the image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedWord {
    /// Raw OCR text of the boxed word
    pub text: String,
    /// Allergen that triggered the marker
    pub allergen: String,
    pub bounding_box: BoundingBox,
    pub confidence: i32,
}

/// Draw a marker for every (word box, allergen) pair that qualifies
///
/// A box qualifies when its trimmed, lowercased raw text contains the
/// allergen and its confidence is strictly above `confidence_threshold`.
/// Several allergens on one box draw several overlapping markers.
pub fn highlight(
    image: &mut RgbImage,
    word_boxes: &[OcrWordBox],
    found_allergens: &BTreeSet<String>,
    confidence_threshold: i32,
) -> Vec<HighlightedWord> {
    let mut drawn = Vec::new();

    for word in word_boxes {
        let text = word.text.trim().to_lowercase();
        for allergen in found_allergens {
            if text.contains(allergen.as_str()) && word.confidence > confidence_threshold {
                draw_marker(image, &word.bounding_box);
                drawn.push(HighlightedWord {
                    text: word.text.clone(),
                    allergen: allergen.clone(),
                    bounding_box: word.bounding_box,
                    confidence: word.confidence,
                });
            }
        }
    }

    drawn
}

/// Rectangle outline from (left, top) to (left + width, top + height) inclusive
///
/// Boxes are clipped a few pixels past the image edge so every coordinate
/// handed to `Rect` fits an `i32`; the clipped part was never visible.
fn draw_marker(image: &mut RgbImage, bbox: &BoundingBox) {
    let (image_width, image_height) = image.dimensions();
    if bbox.left >= image_width || bbox.top >= image_height {
        return;
    }
    let outer_width = bbox
        .width
        .saturating_add(1)
        .min((image_width - bbox.left).saturating_add(MARKER_THICKNESS));
    let outer_height = bbox
        .height
        .saturating_add(1)
        .min((image_height - bbox.top).saturating_add(MARKER_THICKNESS));

    for inset in 0..MARKER_THICKNESS {
        if outer_width <= 2 * inset || outer_height <= 2 * inset {
            break;
        }
        let left = bbox.left.saturating_add(inset);
        let top = bbox.top.saturating_add(inset);
        let rect = Rect::at(left as i32, top as i32)
            .of_size(outer_width - 2 * inset, outer_height - 2 * inset);
        draw_hollow_rect_mut(image, rect, MARKER_COLOR);
    }
}
