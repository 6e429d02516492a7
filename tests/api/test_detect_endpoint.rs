// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /v1/detect through the full router

use allergen_scanner::config::ScannerConfig;
use allergen_scanner::vision::ocr::OcrWordBox;
use allergen_scanner::vision::{decode_base64_image, encode_png_base64};
use axum::http::{Method, StatusCode};
use image::{Rgb, RgbImage};
use serde_json::json;
use std::time::Duration;

use super::scanner_harness::{harness, send, FakeOcr};

fn label_base64() -> String {
    encode_png_base64(&RgbImage::from_pixel(160, 80, Rgb([255, 255, 255]))).unwrap()
}

#[tokio::test]
async fn test_detect_returns_allergens_and_annotated_png() {
    let ocr = FakeOcr::reading(
        "Contains: MILK, soy",
        vec![
            OcrWordBox::new("MILK,", 10, 10, 50, 20, 92),
            OcrWordBox::new("soy", 70, 10, 30, 20, 35),
        ],
    );
    let h = harness(ocr, &["milk", "soy", "egg"], ScannerConfig::default()).await;

    let (status, body) = send(
        &h.app,
        Method::POST,
        "/v1/detect",
        Some(json!({ "image": label_base64() })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["foundAllergens"], json!(["milk", "soy"]));
    assert_eq!(body["normalizedText"], "contains: milk. soy");
    assert_eq!(body["allergensChecked"], 3);
    // Only the confident MILK box is marked
    assert_eq!(body["highlighted"].as_array().unwrap().len(), 1);
    assert_eq!(body["highlighted"][0]["allergen"], "milk");

    let annotated = body["annotatedImage"].as_str().unwrap();
    let (image, _) = decode_base64_image(annotated, usize::MAX).unwrap();
    assert_eq!(image.to_rgb8().get_pixel(10, 10), &Rgb([255, 0, 0]));
}

#[tokio::test]
async fn test_detect_accepts_camera_data_url() {
    let ocr = FakeOcr::reading("peanut butter", vec![]);
    let h = harness(ocr, &["peanut"], ScannerConfig::default()).await;

    let data_url = format!("data:image/png;base64,{}", label_base64());
    let (status, body) = send(
        &h.app,
        Method::POST,
        "/v1/detect",
        Some(json!({ "image": data_url })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["foundAllergens"], json!(["peanut"]));
}

/// Incompressible PNG so the encoded body stays large
fn noisy_photo_base64(width: u32, height: u32) -> String {
    let mut state: u32 = 0x9E37_79B9;
    let image = RgbImage::from_fn(width, height, |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let [r, g, b, _] = state.to_le_bytes();
        Rgb([r, g, b])
    });
    encode_png_base64(&image).unwrap()
}

#[tokio::test]
async fn test_detect_accepts_photo_above_two_megabytes() {
    let ocr = FakeOcr::reading("contains wheat flour", vec![]);
    let h = harness(ocr, &["wheat"], ScannerConfig::default()).await;

    let photo = noisy_photo_base64(900, 800);
    assert!(photo.len() > 2 * 1024 * 1024);

    let (status, body) = send(
        &h.app,
        Method::POST,
        "/v1/detect",
        Some(json!({ "image": photo })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["foundAllergens"], json!(["wheat"]));
}

#[tokio::test]
async fn test_detect_body_over_configured_limit_is_rejected() {
    let config = ScannerConfig {
        max_image_size: 512 * 1024,
        ..Default::default()
    };
    let h = harness(FakeOcr::reading("", vec![]), &["milk"], config).await;

    let (status, _) = send(
        &h.app,
        Method::POST,
        "/v1/detect",
        Some(json!({ "image": noisy_photo_base64(600, 600) })),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_detect_missing_image_is_bad_request() {
    let h = harness(FakeOcr::reading("", vec![]), &[], ScannerConfig::default()).await;

    let (status, body) = send(&h.app, Method::POST, "/v1/detect", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "validation_error");
}

#[tokio::test]
async fn test_detect_garbage_image_is_bad_request() {
    let h = harness(FakeOcr::reading("", vec![]), &[], ScannerConfig::default()).await;

    let (status, body) = send(
        &h.app,
        Method::POST,
        "/v1/detect",
        Some(json!({ "image": "bm90IGFuIGltYWdl" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "image_decode_failure");
}

#[tokio::test]
async fn test_detect_ocr_failure_is_bad_gateway() {
    let mut ocr = FakeOcr::reading("", vec![]);
    ocr.fail = true;
    let h = harness(ocr, &["milk"], ScannerConfig::default()).await;

    let (status, body) = send(
        &h.app,
        Method::POST,
        "/v1/detect",
        Some(json!({ "image": label_base64() })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error_type"], "ocr_engine_failure");
}

#[tokio::test]
async fn test_detect_timeout_is_gateway_timeout() {
    let mut ocr = FakeOcr::reading("milk", vec![]);
    ocr.delay = Some(Duration::from_millis(500));
    let config = ScannerConfig {
        detect_timeout_ms: 20,
        ..Default::default()
    };
    let h = harness(ocr, &["milk"], config).await;

    let (status, body) = send(
        &h.app,
        Method::POST,
        "/v1/detect",
        Some(json!({ "image": label_base64() })),
    )
    .await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["details"]["timeout_ms"], 20);
}

#[tokio::test]
async fn test_detect_sees_allergen_added_earlier() {
    let ocr = FakeOcr::reading("toasted sesame seeds", vec![]);
    let h = harness(ocr, &[], ScannerConfig::default()).await;

    let (status, _) = send(
        &h.app,
        Method::POST,
        "/v1/allergens",
        Some(json!({ "allergen": "Sesame" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &h.app,
        Method::POST,
        "/v1/detect",
        Some(json!({ "image": label_base64() })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["foundAllergens"], json!(["sesame"]));
}

#[tokio::test]
async fn test_health_and_version() {
    let h = harness(FakeOcr::reading("", vec![]), &[], ScannerConfig::default()).await;

    let (status, body) = send(&h.app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&h.app, Method::GET, "/v1/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["features"].as_array().is_some());
}
