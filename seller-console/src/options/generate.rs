//! Variant combination generation
//!
//! Builds one sellable row per element of the Cartesian product of the
//! validated groups' items. Row order is lexicographic over group order: the
//! last group varies fastest. The first row becomes the default
//! representative, so the order is part of the contract.

use rust_decimal::Decimal;
use shared::models::{OptionItem, VariantCombination};
use shared::util::new_row_id;

use super::validate::ValidGroup;

/// Cartesian product over `axes`, preserving axis order inside each tuple.
///
/// Built as a fold over the axes, each step extending every partial tuple
/// with every value of the next axis, so deep option lists cost no stack.
/// An empty axis list yields no tuples.
pub fn cartesian_product<'a, T>(axes: &[&'a [T]]) -> Vec<Vec<&'a T>> {
    if axes.is_empty() {
        return Vec::new();
    }

    axes.iter().copied().fold(vec![Vec::new()], |partials, axis| {
        let mut next = Vec::with_capacity(partials.len() * axis.len());
        for partial in &partials {
            for value in axis {
                let mut tuple = Vec::with_capacity(partial.len() + 1);
                tuple.extend_from_slice(partial);
                tuple.push(value);
                next.push(tuple);
            }
        }
        next
    })
}

/// Number of rows `generate_combinations` produces for these groups.
///
/// `None` when the product overflows `usize`.
pub fn expected_combination_count(groups: &[ValidGroup]) -> Option<usize> {
    if groups.is_empty() {
        return Some(0);
    }
    groups
        .iter()
        .try_fold(1usize, |acc, group| acc.checked_mul(group.items.len()))
}

/// Generate variant rows from validated groups.
///
/// Total for validated input: each row gets a fresh id, the ordered item
/// names, the summed surcharge, zero stock, displayed, and only row 0 is
/// representative.
pub fn generate_combinations(groups: &[ValidGroup]) -> Vec<VariantCombination> {
    let axes: Vec<&[OptionItem]> = groups.iter().map(|g| g.items.as_slice()).collect();

    let rows: Vec<VariantCombination> = cartesian_product(&axes)
        .into_iter()
        .enumerate()
        .map(|(index, tuple)| VariantCombination {
            id: new_row_id(),
            combination: tuple.iter().map(|item| item.name.clone()).collect(),
            price: tuple
                .iter()
                .fold(Decimal::ZERO, |sum, item| sum + item.surcharge()),
            stock: 0,
            is_displayed: true,
            is_representative: index == 0,
        })
        .collect();

    tracing::debug!(
        groups = groups.len(),
        rows = rows.len(),
        "Generated option combinations"
    );
    rows
}
