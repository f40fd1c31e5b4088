//! Combination table edits
//!
//! Price, stock and display are edited per row. The representative flag is a
//! mutually exclusive selector: exactly one row holds it.

use shared::models::{CombinationChange, VariantCombination};

use super::error::{FormError, FormResult};

fn row_index(rows: &[VariantCombination], id: &str) -> FormResult<usize> {
    rows.iter()
        .position(|r| r.id == id)
        .ok_or_else(|| FormError::CombinationNotFound(id.to_string()))
}

pub fn update_combination(
    rows: &mut [VariantCombination],
    id: &str,
    change: CombinationChange,
) -> FormResult<()> {
    let index = row_index(rows, id)?;
    let row = &mut rows[index];
    match change {
        CombinationChange::Price(price) => row.price = price,
        CombinationChange::Stock(stock) => row.stock = stock,
        CombinationChange::Displayed(displayed) => row.is_displayed = displayed,
    }
    Ok(())
}

/// Make `id` the representative row, clearing every other row
pub fn set_representative(rows: &mut [VariantCombination], id: &str) -> FormResult<()> {
    row_index(rows, id)?;
    for row in rows.iter_mut() {
        row.is_representative = row.id == id;
    }
    Ok(())
}

/// Remove a row. If it was the representative, the first remaining row
/// takes over.
pub fn remove_combination(rows: &mut Vec<VariantCombination>, id: &str) -> FormResult<VariantCombination> {
    let index = row_index(rows, id)?;
    let removed = rows.remove(index);
    if removed.is_representative
        && let Some(first) = rows.first_mut()
    {
        first.is_representative = true;
    }
    Ok(removed)
}
