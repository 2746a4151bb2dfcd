//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`cart`, `nav`, `toasts`) so individual
//! components can depend on small focused models, and each model stays
//! testable without a rendered document.

pub mod cart;
pub mod nav;
pub mod toasts;
