// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::allergens::RegistryError;
use crate::detection::DetectionError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    NotFound(String),
    ValidationError { field: String, message: String },
    InvalidImage(String),
    Conflict(String),
    OcrFailure(String),
    InternalError(String),
    Timeout { timeout_ms: u64 },
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        let (error_type, message, details) = match self {
            ApiError::NotFound(msg) => ("not_found", msg.clone(), None),
            ApiError::ValidationError { field, message } => {
                let mut details = HashMap::new();
                details.insert(
                    "field".to_string(),
                    serde_json::Value::String(field.clone()),
                );
                ("validation_error", message.clone(), Some(details))
            }
            ApiError::InvalidImage(msg) => ("image_decode_failure", msg.clone(), None),
            ApiError::Conflict(msg) => ("conflict", msg.clone(), None),
            ApiError::OcrFailure(msg) => ("ocr_engine_failure", msg.clone(), None),
            ApiError::InternalError(msg) => ("internal_error", msg.clone(), None),
            ApiError::Timeout { timeout_ms } => {
                let mut details = HashMap::new();
                details.insert(
                    "timeout_ms".to_string(),
                    serde_json::Value::Number((*timeout_ms).into()),
                );
                ("timeout", "Request timed out".to_string(), Some(details))
            }
        };

        ErrorResponse {
            error_type: error_type.to_string(),
            message,
            details,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => 404,
            ApiError::ValidationError { .. } | ApiError::InvalidImage(_) => 400,
            ApiError::Conflict(_) => 409,
            ApiError::OcrFailure(_) => 502,
            ApiError::InternalError(_) => 500,
            ApiError::Timeout { .. } => 504,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::ValidationError { field, message } => {
                write!(f, "Validation error for {}: {}", field, message)
            }
            ApiError::InvalidImage(msg) => write!(f, "Invalid image: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::OcrFailure(msg) => write!(f, "OCR failure: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Timeout { timeout_ms } => {
                write!(f, "Request timed out after {}ms", timeout_ms)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_response())).into_response()
    }
}

impl From<DetectionError> for ApiError {
    fn from(e: DetectionError) -> Self {
        match e {
            DetectionError::ImageDecode(inner) => ApiError::InvalidImage(inner.to_string()),
            DetectionError::OcrEngine(inner) => ApiError::OcrFailure(inner.to_string()),
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::EmptyName => ApiError::ValidationError {
                field: "allergen".to_string(),
                message: "allergen is required".to_string(),
            },
            other => ApiError::InternalError(other.to_string()),
        }
    }
}
