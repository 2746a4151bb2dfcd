//! Persisted shopping cart state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cart is the one piece of semi-durable state in the client: a list of
//! `{productId, quantity, addedAt}` entries, unique by product id, written
//! wholesale to a single localStorage key on every mutation. The stored
//! format keeps the camelCase keys earlier storefront releases wrote, so
//! carts persisted by them keep loading.
//!
//! Access is synchronous within a single event-handler turn, so there is no
//! read-modify-write race inside this client. A concurrent write from
//! another tab is not synchronized against: last write wins.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// localStorage key holding the JSON-encoded entry list.
pub const CART_STORAGE_KEY: &str = "cart";

/// One cart line: a product and how many of it were added.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(rename = "productId")]
    pub product_id: i64,
    pub quantity: u32,
    /// ISO-8601 timestamp of the first add for this product.
    #[serde(rename = "addedAt")]
    pub added_at: String,
}

/// The full cart collection.
///
/// In the full Leptos implementation this lives in an `RwSignal` provided
/// via context; the struct itself stays DOM-free so merge and count logic
/// is testable directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    pub entries: Vec<CartEntry>,
}

impl CartState {
    /// Add one unit of `product_id`: increments the matching entry's
    /// quantity, or appends a new entry with quantity 1. Returns the
    /// entry's quantity after the add.
    ///
    /// This find-or-append path is what maintains the at-most-one-entry-per
    /// product invariant; nothing validates it on read.
    pub fn add(&mut self, product_id: i64, added_at: impl Into<String>) -> u32 {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.product_id == product_id) {
            entry.quantity += 1;
            return entry.quantity;
        }
        self.entries.push(CartEntry {
            product_id,
            quantity: 1,
            added_at: added_at.into(),
        });
        1
    }

    /// Total number of items across all entries, shown in the cart badge.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Parse a stored JSON entry array.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the stored text is not a valid entry
    /// array, so the caller can log what it is discarding.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<CartEntry>>(raw).map(|entries| Self { entries })
    }

    /// Load the persisted cart. Absent storage yields an empty cart;
    /// malformed stored data also yields an empty cart but is logged, since
    /// silently replacing it would mask corruption.
    #[must_use]
    pub fn load() -> Self {
        let Some(raw) = storage::load_raw(CART_STORAGE_KEY) else {
            return Self::default();
        };
        match Self::parse(&raw) {
            Ok(cart) => cart,
            Err(_err) => {
                #[cfg(feature = "hydrate")]
                log::warn!("discarding unreadable stored cart: {_err}");
                Self::default()
            }
        }
    }

    /// Persist the whole collection under [`CART_STORAGE_KEY`]. Every write
    /// replaces the stored list wholesale; there is no partial update.
    pub fn persist(&self) {
        storage::save_json(CART_STORAGE_KEY, &self.entries);
    }
}
