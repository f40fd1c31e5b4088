//! Option groups → variant combinations
//!
//! - [`validate_option_groups`]: naming checks, filtered groups out
//! - [`generate_combinations`]: Cartesian product into sellable rows
//! - [`validate_combinations_against_groups`]: staleness check before submit
//!
//! Regenerating replaces the stored combination list wholesale; previously
//! entered price/stock values are not carried over.

mod error;
mod generate;
mod staleness;
mod validate;

pub use error::{OptionError, StaleReason};
pub use generate::{cartesian_product, expected_combination_count, generate_combinations};
pub use staleness::{validate_combinations_against_groups, validate_representative};
pub use validate::{ValidGroup, validate_filled_group_names, validate_option_groups};

use shared::models::{OptionGroup, VariantCombination};

/// Validate then generate, as done by "옵션 목록으로 이동".
pub fn build_combinations(groups: &[OptionGroup]) -> Result<Vec<VariantCombination>, OptionError> {
    let valid = validate_option_groups(groups)?;
    Ok(generate_combinations(&valid))
}
