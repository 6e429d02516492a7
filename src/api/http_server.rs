// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::allergens::{add_allergen_handler, list_allergens_handler, remove_allergen_handler};
use super::detect::{detect_handler, max_encoded_image_len};
use crate::allergens::JsonAllergenStore;
use crate::config::ScannerConfig;
use crate::detection::AllergenDetector;
use crate::version;

#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<AllergenDetector>,
    pub registry: Arc<JsonAllergenStore>,
    pub config: Arc<ScannerConfig>,
}

impl AppState {
    pub fn new(
        detector: AllergenDetector,
        registry: JsonAllergenStore,
        config: ScannerConfig,
    ) -> Self {
        Self {
            detector: Arc::new(detector),
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }
}

/// Room for the JSON envelope around the encoded image
const BODY_LIMIT_SLACK: usize = 4 * 1024;

pub fn create_app(state: AppState) -> Router {
    // axum's 2MB default would reject images well under `max_image_size`
    let body_limit =
        max_encoded_image_len(state.config.max_image_size).saturating_add(BODY_LIMIT_SLACK);

    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/version", get(version_handler))
        .route("/v1/detect", axum::routing::post(detect_handler))
        .route(
            "/v1/allergens",
            get(list_allergens_handler).post(add_allergen_handler),
        )
        .route("/v1/allergens/:name", delete(remove_allergen_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.bind_address();
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "version": version::VERSION_NUMBER,
    }))
}

pub async fn version_handler() -> Json<serde_json::Value> {
    Json(version::get_version_info())
}
