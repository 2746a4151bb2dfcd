//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod mobile_nav;
pub mod price_field;
pub mod toast_stack;
