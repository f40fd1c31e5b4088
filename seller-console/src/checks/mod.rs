//! Asynchronous field checks
//!
//! - [`Debouncer`]: latest-wins debouncing of validation calls
//! - [`DuplicationChecker`]: cached "already in use" lookups

mod debounce;
mod duplication;

pub use debounce::Debouncer;
pub use duplication::{DuplicationChecker, DuplicationKind, DuplicationSource};
