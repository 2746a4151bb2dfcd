//! Networking modules for the storefront API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the shared client and its session-expiry interception, `api`
//! layers typed endpoint calls on top, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
