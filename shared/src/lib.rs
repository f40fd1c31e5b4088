//! Shared types for the seller console
//!
//! Product form models, API payloads, the unified error system and
//! small utilities used by every crate in the workspace.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{OptionGroup, OptionItem, VariantCombination};
