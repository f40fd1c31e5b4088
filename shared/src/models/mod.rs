//! Data models
//!
//! Shared between the seller console and the seller API payloads.
//! Row IDs are opaque strings generated client-side.

pub mod option;
pub mod product;
pub mod variant;

// Re-exports
pub use option::*;
pub use product::*;
pub use variant::*;
