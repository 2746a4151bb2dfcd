//! REST API helpers for the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls through the shared [`HttpClient`].
//! Server-side (SSR): stubs returning an error, since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs so fetch failures degrade to a
//! logged error and a toast instead of crashing hydration. Nothing here
//! retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::HttpClient;
use super::types::{CalculateResponse, NewProduct, Product};

#[cfg(any(test, feature = "hydrate"))]
fn products_request_failed_message(status: u16) -> String {
    format!("products request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn calculate_request_failed_message(status: u16) -> String {
    format!("calculate request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_product_failed_message(status: u16) -> String {
    format!("create product failed: {status}")
}

/// Fetch the product collection from `GET /api/products`.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-ok status, or an
/// unparseable body.
pub async fn fetch_products(client: HttpClient) -> Result<Vec<Product>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = client.get("/api/products").await?;
        if !resp.ok() {
            return Err(products_request_failed_message(resp.status()));
        }
        resp.json::<Vec<Product>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = client;
        Err("not available on server".to_owned())
    }
}

/// Fetch the cart grand total from `GET /api/calculate`.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-ok status, or an
/// unparseable body.
pub async fn calculate_total(client: HttpClient) -> Result<CalculateResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = client.get("/api/calculate").await?;
        if !resp.ok() {
            return Err(calculate_request_failed_message(resp.status()));
        }
        resp.json::<CalculateResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = client;
        Err("not available on server".to_owned())
    }
}

/// Create a product via `POST /api/products` and return the created record.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-ok status, or an
/// unparseable body.
pub async fn create_product(client: HttpClient, product: &NewProduct) -> Result<Product, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = client.post_json("/api/products", product).await?;
        if !resp.ok() {
            return Err(create_product_failed_message(resp.status()));
        }
        resp.json::<Product>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, product);
        Err("not available on server".to_owned())
    }
}
