// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Allergen list handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use super::request::AddAllergenRequest;
use super::response::{AllergenChangeResponse, AllergenListResponse};
use crate::allergens::{normalize_name, AddOutcome};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// GET /v1/allergens - List allergens in insertion order
pub async fn list_allergens_handler(State(state): State<AppState>) -> Json<AllergenListResponse> {
    Json(AllergenListResponse::new(state.registry.names().await))
}

/// POST /v1/allergens - Add an allergen
///
/// Returns 201 when added and 409 when the lowercased name is already listed.
pub async fn add_allergen_handler(
    State(state): State<AppState>,
    Json(request): Json<AddAllergenRequest>,
) -> Result<(StatusCode, Json<AllergenChangeResponse>), ApiError> {
    let name = request.validate()?;

    match state.registry.add(name).await? {
        AddOutcome::Added(name) => Ok((
            StatusCode::CREATED,
            Json(AllergenChangeResponse {
                message: format!("Allergen '{}' added successfully", name),
                allergen: name,
            }),
        )),
        AddOutcome::AlreadyExists(name) => {
            info!("Allergen '{}' already listed", name);
            Err(ApiError::Conflict(format!("Allergen '{}' already exists", name)))
        }
    }
}

/// DELETE /v1/allergens/:name - Remove an allergen
pub async fn remove_allergen_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<AllergenChangeResponse>, ApiError> {
    let Some(normalized) = normalize_name(&name) else {
        return Err(ApiError::ValidationError {
            field: "name".to_string(),
            message: "allergen name is required".to_string(),
        });
    };

    if state.registry.remove(&normalized).await? {
        Ok(Json(AllergenChangeResponse {
            message: format!("Allergen '{}' removed successfully", normalized),
            allergen: normalized,
        }))
    } else {
        warn!("Remove requested for unknown allergen '{}'", normalized);
        Err(ApiError::NotFound(format!(
            "Allergen '{}' not found",
            normalized
        )))
    }
}
