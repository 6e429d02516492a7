// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detect API endpoint module
//!
//! Provides POST /v1/detect for scanning a label image for allergens.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::detect_handler;
pub use request::{max_encoded_image_len, DetectRequest};
pub use response::DetectResponse;
