//! Form-level consistency checks between stored combinations and the live
//! option groups.
//!
//! Combinations are only rebuilt on "옵션 목록으로 이동", so the seller can edit
//! groups afterwards and submit rows that no longer describe what is sold.

use std::collections::HashMap;

use shared::models::{OptionGroup, VariantCombination};

use super::error::{OptionError, StaleReason};

/// Fail when stored combinations no longer correspond to the option groups.
///
/// Only filled groups (name plus at least one filled item) take part. With no
/// filled group any combination list is accepted.
pub fn validate_combinations_against_groups(
    combinations: &[VariantCombination],
    groups: &[OptionGroup],
) -> Result<(), OptionError> {
    let filled: Vec<Vec<&str>> = groups
        .iter()
        .filter(|group| group.is_filled())
        .map(|group| group.filled_items().map(|item| item.name.trim()).collect())
        .collect();

    if filled.is_empty() {
        return Ok(());
    }
    if combinations.is_empty() {
        return Err(OptionError::CombinationsNotGenerated);
    }

    let expected = filled
        .iter()
        .try_fold(1usize, |acc, names| acc.checked_mul(names.len()));
    if expected != Some(combinations.len()) {
        return Err(OptionError::CombinationsStale(StaleReason::CountMismatch {
            expected: expected.unwrap_or(usize::MAX),
            actual: combinations.len(),
        }));
    }

    // with the count matching, distinct rows cover every combination once
    let mut seen: HashMap<Vec<&str>, usize> = HashMap::with_capacity(combinations.len());
    for (row, combination) in combinations.iter().enumerate() {
        if combination.combination.len() != filled.len() {
            return Err(OptionError::CombinationsStale(StaleReason::ArityMismatch {
                row,
                expected: filled.len(),
                actual: combination.combination.len(),
            }));
        }

        for (position, (name, current)) in
            combination.combination.iter().zip(&filled).enumerate()
        {
            if !current.contains(&name.trim()) {
                return Err(OptionError::CombinationsStale(StaleReason::UnknownItem {
                    row,
                    position,
                    name: name.clone(),
                }));
            }
        }

        let key: Vec<&str> = combination.combination.iter().map(|n| n.trim()).collect();
        if let Some(&first) = seen.get(&key) {
            return Err(OptionError::CombinationsStale(StaleReason::DuplicateRow {
                row,
                first,
            }));
        }
        seen.insert(key, row);
    }

    Ok(())
}

/// Exactly one row must be representative once combinations exist.
pub fn validate_representative(combinations: &[VariantCombination]) -> Result<(), OptionError> {
    if combinations.is_empty() {
        return Ok(());
    }
    let count = combinations.iter().filter(|c| c.is_representative).count();
    if count != 1 {
        return Err(OptionError::RepresentativeRequired { count });
    }
    Ok(())
}
