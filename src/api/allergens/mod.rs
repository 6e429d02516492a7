// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Allergen list endpoints
//!
//! GET/POST /v1/allergens and DELETE /v1/allergens/:name.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{add_allergen_handler, list_allergens_handler, remove_allergen_handler};
pub use request::AddAllergenRequest;
pub use response::{AllergenChangeResponse, AllergenListResponse};
