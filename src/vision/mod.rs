// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vision processing for food label photographs
//!
//! This module provides:
//! - Image decoding/encoding for uploads and annotated output
//! - OCR via the Tesseract engine

pub mod image_utils;
pub mod ocr;

pub use image_utils::{
    decode_base64_image, decode_data_url, decode_image_bytes, detect_format, encode_png,
    encode_png_base64, ImageError, ImageInfo, DEFAULT_MAX_IMAGE_SIZE,
};
