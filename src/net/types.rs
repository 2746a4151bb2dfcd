//! DTOs for the storefront REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads; unknown fields are
//! ignored on deserialize so the backend can grow its schema without
//! breaking the client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A product as returned by `GET /api/products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend primary key.
    pub id: i64,
    pub name: String,
    /// Sell-side unit price.
    pub price: f64,
}

/// Response of `GET /api/calculate`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CalculateResponse {
    /// Grand total as a float, for display.
    pub total_value: f64,
    /// Exact decimal rendering of the same total, for logging.
    pub precision: String,
}

/// Payload for `POST /api/products`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}
