// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detect endpoint handler

use axum::{extract::State, Json};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::request::DetectRequest;
use super::response::DetectResponse;
use crate::allergens::AllergenRegistry;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::detection::DetectionError;
use crate::vision::{decode_data_url, encode_png_base64};

/// POST /v1/detect - Scan a label image for allergens
///
/// The allergen list is snapshotted once per request, so concurrent edits
/// never change the list mid-detection. Decoding and detection both run on
/// the blocking pool. The timeout only abandons the wait: the blocking task,
/// and any Tesseract child it started, runs to completion in the background.
///
/// # Errors
/// - 400 Bad Request: missing or undecodable image
/// - 502 Bad Gateway: the OCR engine failed
/// - 504 Gateway Timeout: detection exceeded the configured timeout
pub async fn detect_handler(
    State(state): State<AppState>,
    Json(request): Json<DetectRequest>,
) -> Result<Json<DetectResponse>, ApiError> {
    request.validate(state.config.max_image_size).map_err(|e| {
        warn!("Detect validation failed: {}", e);
        e
    })?;
    let image_data = request.image.unwrap_or_default();

    let allergens = state.registry.list_allergens().await?;
    debug!("Checking against {} allergens", allergens.len());

    let timeout_ms = state.config.detect_timeout_ms;
    let max_image_size = state.config.max_image_size;
    let detector = state.detector.clone();
    let allergens_checked = allergens.len();
    let task = tokio::task::spawn_blocking(move || -> Result<_, DetectionError> {
        let (image, image_info) = decode_data_url(&image_data, max_image_size)?;
        debug!(
            "Decoded image: {}x{}, {} bytes",
            image_info.width, image_info.height, image_info.size_bytes
        );
        detector.detect(image.to_rgb8(), &allergens)
    });

    let result = tokio::time::timeout(Duration::from_millis(timeout_ms), task)
        .await
        .map_err(|_| {
            warn!("Detection timed out after {}ms", timeout_ms);
            ApiError::Timeout { timeout_ms }
        })?
        .map_err(|e| ApiError::InternalError(format!("Detection task failed: {}", e)))?
        .map_err(|e| {
            warn!("Detection failed ({}): {}", e.kind(), e);
            ApiError::from(e)
        })?;

    let annotated_image = encode_png_base64(&result.annotated_image)
        .map_err(|e| ApiError::InternalError(format!("Failed to encode image: {}", e)))?;

    info!(
        "Detect complete: {} allergens found, {} markers, {}ms",
        result.found_allergens.len(),
        result.highlighted.len(),
        result.processing_time_ms
    );

    Ok(Json(DetectResponse {
        found_allergens: result.found_allergens.into_iter().collect(),
        normalized_text: result.normalized_text,
        annotated_image,
        highlighted: result.highlighted,
        allergens_checked,
        processing_time_ms: result.processing_time_ms,
    }))
}
